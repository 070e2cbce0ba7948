use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn demo_walks_the_whole_lending_workflow() {
    let mut cmd = Command::cargo_bin("biblio").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.arg("demo")
        .assert()
        .success()
        // Stocking, including the duplicate ISBN bounce
        .stdout(predicate::str::contains(
            "Added \"The Hobbit\" by J. R. R. Tolkien (ISBN 9780547928227)",
        ))
        .stdout(predicate::str::contains(
            "ISBN 9780547928227 is already in the catalog",
        ))
        // Lending: first borrower wins, second bounces
        .stdout(predicate::str::contains("Maya Chen borrowed \"The Hobbit\""))
        .stdout(predicate::str::contains("Book is on loan: 9780547928227"))
        // Three-valued availability
        .stdout(predicate::str::contains(
            "\"The Hobbit\" is on loan to Maya Chen",
        ))
        .stdout(predicate::str::contains("\"The Dispossessed\" is available"))
        .stdout(predicate::str::contains(
            "No book with ISBN 0000000000000 in the catalog",
        ))
        // Return frees the book again
        .stdout(predicate::str::contains("Maya Chen returned \"The Hobbit\""))
        .stdout(predicate::str::contains("\"The Hobbit\" is available"))
        // The log keeps both successful borrows
        .stdout(predicate::str::contains(
            "Maya Chen (card C-001) borrowed \"The Hobbit\"",
        ))
        .stdout(predicate::str::contains(
            "Tomás Rivera (card C-002) borrowed \"A Wizard of Earthsea\"",
        ));
}

#[test]
fn shell_quits_cleanly_and_lists_an_empty_catalog() {
    let mut cmd = Command::cargo_bin("biblio").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd.arg("--empty")
        .arg("--name")
        .arg("Test Branch")
        .write_stdin("1\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Test Branch ==="))
        .stdout(predicate::str::contains("The catalog has no books yet"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn shell_surfaces_domain_failures_and_keeps_running() {
    let mut cmd = Command::cargo_bin("biblio").unwrap();
    cmd.env("NO_COLOR", "1");
    // Borrow with an unregistered card, then quit.
    cmd.arg("--empty")
        .write_stdin("5\nno-card\nno-isbn\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Patron not found: no-card"))
        .stdout(predicate::str::contains("Goodbye."));
}
