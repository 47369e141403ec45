//! Drive the needle with a random walk, rotation unlimited.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use rand::Rng;

use dial::{Color, Dial, DialCommand, DialConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DialConfig::builder()
        .width(200)
        .height(200)
        .padding(16)
        .needle_pad(14)
        .needle_color(Color::from_hex(0xcc2200))
        .limit_rotation(false)
        .background_color(Color::from_hex(0x181818))
        .build();
    let dial = Dial::new(config)?;

    let (sender, receiver) = mpsc::channel();

    thread::spawn(move || {
        let mut rng = rand::rng();
        let mut value: f64 = 50.0;
        loop {
            value += rng.random_range(-4.0..4.0);
            if sender.send(DialCommand::SetValue(value)).is_err() {
                break;
            }
            thread::sleep(Duration::from_millis(100));
        }
    });

    println!("Needle wandering randomly, free to rotate past the range.");
    println!("Press Ctrl+C to exit");
    dial.show_with_commands("Dial wander", receiver)
}
