//! Sweep the dial value up and back down, one step at a time.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use dial::{Dial, DialCommand, DialConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DialConfig::builder()
        .x(100)
        .y(120)
        .width(150)
        .height(150)
        .padding(12)
        .min_value(0.0)
        .max_value(100.0)
        .needle_full(true)
        .build();
    let dial = Dial::new(config)?;

    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || loop {
        for value in (1..=100).chain((0..=99).rev()) {
            if sender.send(DialCommand::SetValue(value as f64)).is_err() {
                return;
            }
            thread::sleep(Duration::from_millis(30));
        }
        thread::sleep(Duration::from_millis(500));
    });

    println!("Sweeping the dial from 0 to 100 and back. Press Ctrl+C to exit");
    dial.show_with_commands("Dial sweep", receiver)
}
