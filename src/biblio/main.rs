use biblio::api::{CatalogApi, CmdMessage, CmdResult, MessageLevel, PatronSummary};
use biblio::catalog::Catalog;
use biblio::config::BiblioConfig;
use biblio::error::{BiblioError, Result};
use biblio::model::{BookStatus, LoanRecord};
use chrono::{DateTime, Utc};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use std::io::{self, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli);

    match cli.command {
        Some(Commands::Demo) => run_demo(&config),
        Some(Commands::Shell) | None => {
            let mut catalog = Catalog::with_limit(config.library_name.clone(), config.borrow_limit);
            if !cli.empty {
                seed_catalog(&mut catalog);
            }
            run_shell(&mut CatalogApi::new(catalog))
        }
    }
}

fn load_config(cli: &Cli) -> BiblioConfig {
    let mut config = match ProjectDirs::from("com", "biblio", "biblio") {
        Some(dirs) => BiblioConfig::load(dirs.config_dir()).unwrap_or_default(),
        None => BiblioConfig::default(),
    };
    if let Some(name) = &cli.name {
        config.library_name = name.clone();
    }
    if let Some(limit) = cli.limit {
        config.set_borrow_limit(limit);
    }
    config
}

fn seed_catalog(catalog: &mut Catalog) {
    let shelf = [
        ("The Hobbit", "J. R. R. Tolkien", "9780547928227"),
        ("A Wizard of Earthsea", "Ursula K. Le Guin", "9780547773742"),
        ("The Left Hand of Darkness", "Ursula K. Le Guin", "9780441478125"),
    ];
    for (title, author, isbn) in shelf {
        // A fresh catalog can't collide on these keys.
        let _ = catalog.add_book(title.into(), author.into(), isbn.into());
    }
    let _ = catalog.register_patron("Maya Chen".into(), "C-001".into());
    let _ = catalog.register_patron("Tomás Rivera".into(), "C-002".into());
}

// --- Interactive shell ---

fn run_shell(api: &mut CatalogApi) -> Result<()> {
    println!();
    println!("{}", format!("=== {} ===", api.catalog().name()).bold());
    println!(
        "{}",
        format!(
            "Borrow limit: {} books per card",
            api.catalog().borrow_limit()
        )
        .dimmed()
    );

    loop {
        print_menu();
        let choice = match read_line("Choose an option")? {
            Some(choice) => choice,
            None => break, // stdin closed
        };

        match choice.as_str() {
            "0" | "q" | "quit" | "exit" => break,
            "1" => render(api.list_books()),
            "2" => {
                let keyword = ask("Keyword (title, author, or ISBN)")?;
                render(api.search_books(&keyword));
            }
            "3" => {
                let title = ask("Title")?;
                let author = ask("Author")?;
                let isbn = ask("ISBN")?;
                render(api.add_book(title, author, isbn));
            }
            "4" => {
                let name = ask("Name")?;
                let card_id = ask("Card id")?;
                render(api.register_patron(name, card_id));
            }
            "5" => {
                let card_id = ask("Card id")?;
                let isbn = ask("ISBN")?;
                render(api.borrow_book(&card_id, &isbn));
            }
            "6" => {
                let card_id = ask("Card id")?;
                let isbn = ask("ISBN")?;
                render(api.return_book(&card_id, &isbn));
            }
            "7" => {
                let isbn = ask("ISBN")?;
                render(api.check_availability(&isbn));
            }
            "8" => {
                let card_id = ask("Card id")?;
                render(api.patron_holdings(&card_id));
            }
            "9" => render(api.list_patrons()),
            "10" => render(api.list_records()),
            "11" => {
                let isbn = ask("ISBN")?;
                render(api.remove_book(&isbn));
            }
            "" => {}
            _ => println!("{}", "Invalid choice, try again.".red()),
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_menu() {
    println!();
    println!(" 1. Browse all books");
    println!(" 2. Search books");
    println!(" 3. Add a book");
    println!(" 4. Register a patron");
    println!(" 5. Borrow a book");
    println!(" 6. Return a book");
    println!(" 7. Check availability");
    println!(" 8. Patron holdings");
    println!(" 9. List patrons");
    println!("10. Loan log");
    println!("11. Remove a book");
    println!(" 0. Quit");
}

fn read_line(label: &str) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask(label: &str) -> Result<String> {
    read_line(label)?.ok_or_else(|| {
        BiblioError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
    })
}

// --- Demo walkthrough ---

fn run_demo(config: &BiblioConfig) -> Result<()> {
    let catalog = Catalog::with_limit(config.library_name.clone(), config.borrow_limit);
    let mut api = CatalogApi::new(catalog);

    banner("Stocking the shelves");
    render(api.add_book(
        "The Hobbit".into(),
        "J. R. R. Tolkien".into(),
        "9780547928227".into(),
    ));
    render(api.add_book(
        "A Wizard of Earthsea".into(),
        "Ursula K. Le Guin".into(),
        "9780547773742".into(),
    ));
    render(api.add_book(
        "The Dispossessed".into(),
        "Ursula K. Le Guin".into(),
        "9780061054884".into(),
    ));
    // Same ISBN twice: the second copy is turned away.
    render(api.add_book(
        "The Hobbit (reprint)".into(),
        "J. R. R. Tolkien".into(),
        "9780547928227".into(),
    ));

    banner("Registering patrons");
    render(api.register_patron("Maya Chen".into(), "C-001".into()));
    render(api.register_patron("Tomás Rivera".into(), "C-002".into()));

    banner("The shelves");
    render(api.list_books());

    banner("Borrowing");
    render(api.borrow_book("C-001", "9780547928227"));
    // A second reader asks for the same copy.
    render(api.borrow_book("C-002", "9780547928227"));
    render(api.borrow_book("C-002", "9780547773742"));

    banner("Availability checks");
    render(api.check_availability("9780547928227"));
    render(api.check_availability("9780061054884"));
    render(api.check_availability("0000000000000"));

    banner("A lent book stays on the roll");
    render(api.remove_book("9780547928227"));

    banner("Returning");
    render(api.return_book("C-001", "9780547928227"));
    render(api.check_availability("9780547928227"));

    banner("Holdings and the loan log");
    render(api.patron_holdings("C-002"));
    render(api.list_patrons());
    render(api.list_records());

    Ok(())
}

fn banner(title: &str) {
    println!();
    println!("{}", format!("── {} ──", title).bold());
}

// --- Rendering ---

fn render(outcome: Result<CmdResult>) {
    match outcome {
        Ok(result) => print_result(&result),
        Err(e) => println!("{}", e.to_string().red()),
    }
}

fn print_result(result: &CmdResult) {
    if !result.books.is_empty() {
        print_books(&result.books);
    }
    if !result.patrons.is_empty() {
        print_patrons(&result.patrons);
    }
    if !result.records.is_empty() {
        print_records(&result.records);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const TITLE_WIDTH: usize = 32;
const AUTHOR_WIDTH: usize = 22;

fn print_books(books: &[BookStatus]) {
    for (i, book) in books.iter().enumerate() {
        let status = match &book.holder {
            Some(name) => format!("on loan to {}", name).yellow(),
            None => "available".green(),
        };
        println!(
            "{:>3}. {} {} {}  {}",
            i + 1,
            fit(&book.title, TITLE_WIDTH),
            fit(&book.author, AUTHOR_WIDTH).dimmed(),
            book.isbn.dimmed(),
            status
        );
    }
}

fn print_patrons(patrons: &[PatronSummary]) {
    for (i, patron) in patrons.iter().enumerate() {
        let out = match patron.held_count {
            0 => "no books out".to_string(),
            1 => "1 book out".to_string(),
            n => format!("{} books out", n),
        };
        println!(
            "{:>3}. {} {}  {}",
            i + 1,
            fit(&patron.name, 24),
            format!("(card {})", patron.card_id).dimmed(),
            out
        );
    }
}

fn print_records(records: &[LoanRecord]) {
    for (i, record) in records.iter().enumerate() {
        println!(
            "{:>3}. {} (card {}) borrowed \"{}\" (ISBN {})  {}",
            i + 1,
            record.patron_name,
            record.card_id,
            record.book_title,
            record.isbn,
            format_time_ago(record.borrowed_at).dimmed()
        );
    }
}

/// Truncate-and-pad to a fixed display width; titles and names may be CJK,
/// so bytes and chars are both wrong units here.
fn fit(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
