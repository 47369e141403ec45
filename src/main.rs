use std::env;
use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use tracing_subscriber::EnvFilter;

use dial::{Dial, DialCommand, DialConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    // Parse --range MIN MAX, --title TITLE and --full from the command line
    let mut min_value = 0.0;
    let mut max_value = 100.0;
    let mut window_title = "Dial".to_string();
    let mut needle_full = false;
    let mut args = env::args();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--range" => {
                if let (Some(x), Some(y)) = (args.next(), args.next()) {
                    if let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) {
                        min_value = x.min(y);
                        max_value = x.max(y);
                    }
                }
            }
            "--title" => {
                if let Some(title) = args.next() {
                    window_title = title;
                }
            }
            "--full" => needle_full = true,
            _ => {}
        }
    }

    // Labels reflect the requested range, evenly across the major ticks.
    let major_ticks = 5u32;
    let labels: Vec<String> = (0..major_ticks)
        .map(|i| {
            let t = i as f64 / (major_ticks - 1) as f64;
            format!("{}", (min_value + t * (max_value - min_value)).round() as i64)
        })
        .collect();

    let config = DialConfig::builder()
        .width(150)
        .height(150)
        .padding(12)
        .min_value(min_value)
        .max_value(max_value)
        .major_ticks(major_ticks)
        .major_tick_labels(labels)
        .needle_full(needle_full)
        .build();
    let dial = Dial::new(config)?;

    // Feed piped values to the window: one f64 per stdin line.
    let (sender, receiver) = mpsc::channel();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Ok(value) = line.trim().parse::<f64>() {
                if sender.send(DialCommand::SetValue(value)).is_err() {
                    break;
                }
            }
        }
    });

    dial.show_with_commands(&window_title, receiver)
}
