//! Walk a `Session` through a typical sequence of UI events and print the
//! results the UI would render, with solver logs on stderr.
//!
//! Run:
//!   cargo run -p trisolve --example session_walkthrough

use nalgebra::vector;
use tracing_subscriber::fmt::SubscriberBuilder;
use trisolve::text::cells;
use trisolve::{FieldKey, Mode, Session};

fn print_result(title: &str, s: &Session) {
    println!("== {} [{}]", title, s.current().status);
    for (key, cell) in cells(s.current()) {
        match cell.tooltip() {
            Some(why) => println!("  {:>4}: {:<9} ({})", key, cell.text(), why),
            None => println!("  {:>4}: {}", key, cell.text()),
        }
    }
}

fn main() {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let mut s = Session::new();
    for p in [vector![40.0, 200.0], vector![260.0, 200.0], vector![120.0, 60.0]] {
        s.click(p);
    }
    s.compute();
    print_result("three clicks", &s);

    s.set_mode(Mode::Angles);
    s.set_input_text(FieldKey::A, "90");
    s.set_input_text(FieldKey::B, "45");
    s.set_input_text(FieldKey::SideA, "5");
    s.compute();
    print_result("A=90 B=45 a=5", &s);

    s.set_input_text(FieldKey::Aext, "70");
    s.compute();
    print_result("contradicting Aext", &s);

    s.replay();
    print_result("replayed", &s);
    println!("history panel: {}", s.history_display().status);

    match serde_json::to_string_pretty(s.current()) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("serialize failed: {}", e),
    }
    match serde_json::to_string(&s.scene(320.0, 240.0)) {
        Ok(json) => println!("scene: {}", json),
        Err(e) => eprintln!("serialize failed: {}", e),
    }
}
