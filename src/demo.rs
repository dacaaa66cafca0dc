//! Runs the demonstrations against any output sink.

use crate::config::DemoConfig;
use crate::error::DemoError;
use crate::fancy_rectangle::{AreaCalculator, FancyRectangle};
use crate::file_handler::{BinaryFileHandler, FileHandler, TextFileHandler};
use crate::shape::{total_area, Circle, Rectangle, Shape};
use crate::sound::{process_sound, Cat, Dog};
use crate::vehicle::{Bike, Car, Vehicle};
use colored::Colorize;
use serde::Deserialize;
use std::io::Write;

pub const TEXT_SAMPLE: &str = "Hello, Abstract Base Classes!";
pub const BINARY_SAMPLE: &[u8] = b"\x48\x65\x6C\x6C\x6F";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Vehicles,
    Shapes,
    FancyRectangle,
    Sounds,
    Greeting,
    Files,
}

impl Demo {
    pub const ALL: [Demo; 6] = [
        Demo::Vehicles,
        Demo::Shapes,
        Demo::FancyRectangle,
        Demo::Sounds,
        Demo::Greeting,
        Demo::Files,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Demo::Vehicles => "Number 1: Inheritance + overriding",
            Demo::Shapes => "Number 2: Polymorphism with area()",
            Demo::FancyRectangle => "Number 3: Deferred base initialization",
            Demo::Sounds => "Number 4: Duck typing via SoundMaker",
            Demo::Greeting => "Entry point greeting",
            Demo::Files => "Question 5: FileHandler text vs binary",
        }
    }
}

pub fn greet(name: &str) -> String {
    format!("Hi, {name}")
}

fn heading(out: &mut impl Write, title: &str, color: bool) -> std::io::Result<()> {
    if color {
        writeln!(out, "{}", format!("=== {title} ===").bold().cyan())
    } else {
        writeln!(out, "=== {title} ===")
    }
}

pub fn run_demo<W: Write>(demo: Demo, config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    tracing::debug!(?demo, "running demonstration");
    heading(out, demo.title(), config.output.color)?;

    match demo {
        Demo::Vehicles => {
            let fleet: Vec<Box<dyn Vehicle>> = vec![
                Box::new(Car::new("Toyota", "Corolla")),
                Box::new(Bike::new("Trek", "FX 3")),
            ];
            for vehicle in &fleet {
                writeln!(out, "{}", vehicle.start())?;
            }
        }
        Demo::Shapes => {
            let items: Vec<Box<dyn Shape>> = vec![
                Box::new(Circle::new(2.0)),
                Box::new(Rectangle::new(3.0, 4.0)),
                Box::new(Circle::new(1.0)),
            ];
            writeln!(out, "Total area: {}", total_area(&items))?;
        }
        Demo::FancyRectangle => {
            let mut rect = FancyRectangle::new(5.0, 4.0);
            let area = rect.calculate_area();
            writeln!(out, "FancyRectangle area: {area}")?;
            writeln!(out, "FancyRectangle color after ensure: {}", rect.color()?)?;
        }
        Demo::Sounds => {
            process_sound(out, &Dog)?;
            process_sound(out, &Cat)?;
        }
        Demo::Greeting => {
            writeln!(out, "{}", greet(&config.greeting.name))?;
        }
        Demo::Files => {
            let text_path = config.files.text_path();
            let binary_path = config.files.binary_path();
            let text_handler = TextFileHandler;
            let binary_handler = BinaryFileHandler;

            text_handler.write(&text_path, TEXT_SAMPLE)?;
            writeln!(out, "{}", text_handler.read(&text_path)?)?;

            binary_handler.write(&binary_path, BINARY_SAMPLE)?;
            let bytes = binary_handler.read(&binary_path)?;
            writeln!(out, "b\"{}\"", bytes.escape_ascii())?;
        }
    }

    Ok(())
}

pub fn run_all<W: Write>(config: &DemoConfig, out: &mut W) -> Result<(), DemoError> {
    for (index, demo) in config.demos.iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        run_demo(*demo, config, out)?;
    }
    out.flush()?;
    Ok(())
}
