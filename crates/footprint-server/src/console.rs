//! Colorful console output for the footprint service.
//!
//! Provides a custom `tracing` layer that formats calculation events with
//! colors and renders every other event on a single plain line.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides `default_filter` when set.
pub fn init(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(FootprintConsoleLayer)
            .try_init();
    });
}

/// Prints the startup banner.
pub fn print_banner() {
    let banner = r#"
 _____           _              _       _
|  ___|__   ___ | |_ _ __  _ __(_)_ __ | |_
| |_ / _ \ / _ \| __| '_ \| '__| | '_ \| __|
|  _| (_) | (_) | |_| |_) | |  | | | | | |_
|_|  \___/ \___/ \__| .__/|_|  |_|_| |_|\__|
                    |_|
"#;

    let version_line = format!(
        "            v{} - Household Carbon Footprint Calculator\n",
        env!("CARGO_PKG_VERSION")
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_green());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats service events with colors.
pub struct FootprintConsoleLayer;

impl<S: Subscriber> Layer<S> for FootprintConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(*metadata.level(), metadata.target(), &visitor);
        let _ = writeln!(io::stdout(), "{}", output);
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    calculation: Option<u64>,
    total_tonnes: Option<f64>,
    energy_kg: Option<f64>,
    transport_kg: Option<f64>,
    diet_kg: Option<f64>,
    waste_kg: Option<f64>,
    error: Option<String>,
    fields: Vec<(&'static str, String)>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s),
            "error" => self.error = Some(s),
            name => self.fields.push((name, s)),
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "calculation" => self.calculation = Some(value),
            name => self.fields.push((name, value.to_string())),
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields.push((field.name(), value.to_string()));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "total_tonnes" => self.total_tonnes = Some(value),
            "energy_kg" => self.energy_kg = Some(value),
            "transport_kg" => self.transport_kg = Some(value),
            "diet_kg" => self.diet_kg = Some(value),
            "waste_kg" => self.waste_kg = Some(value),
            name => self.fields.push((name, value.to_string())),
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "error" => self.error = Some(value.to_string()),
            name => self.fields.push((name, value.to_string())),
        }
    }
}

fn format_event(level: Level, target: &str, v: &EventVisitor) -> String {
    match v.message.as_deref() {
        Some("Footprint calculated") => format_calculated(v),
        Some("Input rejected") => format_rejected(v),
        _ => format_plain(level, target, v),
    }
}

fn format_calculated(v: &EventVisitor) -> String {
    let calculation = v.calculation.unwrap_or(0);
    let tonnes = |kg: Option<f64>| format!("{:.2}t", kg.unwrap_or(0.0) / 1000.0);

    let mut line = format!(
        "{} {} {} #{} total ({}) energy ({}) transport ({}) diet ({}) waste ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Footprint]".bright_cyan(),
        calculation.to_formatted_string(&Locale::en).white(),
        format!("{:.2}t CO2e", v.total_tonnes.unwrap_or(0.0)).bright_yellow().bold(),
        tonnes(v.energy_kg).yellow(),
        tonnes(v.transport_kg).yellow(),
        tonnes(v.diet_kg).yellow(),
        tonnes(v.waste_kg).yellow()
    );
    for (name, value) in &v.fields {
        let _ = write!(line, " {}={}", name.bright_black(), value);
    }
    line
}

fn format_rejected(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Input rejected: {}",
        timestamp().bright_black(),
        "WARN".bright_yellow(),
        "[Footprint]".bright_cyan(),
        v.error.as_deref().unwrap_or("unknown error").bright_red()
    )
}

fn format_plain(level: Level, target: &str, v: &EventVisitor) -> String {
    let mut line = format!(
        "{} {} {} {}",
        timestamp().bright_black(),
        colored_level(level),
        format!("[{}]", target).bright_black(),
        v.message.as_deref().unwrap_or("")
    );
    if let Some(error) = &v.error {
        let _ = write!(line, " {}={}", "error".bright_black(), error.bright_red());
    }
    for (name, value) in &v.fields {
        let _ = write!(line, " {}={}", name.bright_black(), value);
    }
    line
}

fn colored_level(level: Level) -> String {
    match level {
        Level::ERROR => "ERROR".bright_red().bold().to_string(),
        Level::WARN => " WARN".bright_yellow().to_string(),
        Level::INFO => " INFO".bright_green().to_string(),
        Level::DEBUG => "DEBUG".bright_blue().to_string(),
        Level::TRACE => "TRACE".bright_black().to_string(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculated_event() {
        let visitor = EventVisitor {
            message: Some("Footprint calculated".to_string()),
            calculation: Some(12_345),
            total_tonnes: Some(3.1975),
            energy_kg: Some(529.5),
            fields: vec![("diet", "vegana".to_string())],
            ..EventVisitor::default()
        };

        let line = format_event(Level::INFO, "footprint_server::api", &visitor);
        assert!(line.contains("12,345"));
        assert!(line.contains("3.20t CO2e"));
        assert!(line.contains("0.53t"));
        assert!(line.contains("vegana"));
    }

    #[test]
    fn test_rejected_event() {
        let visitor = EventVisitor {
            message: Some("Input rejected".to_string()),
            error: Some("invalid value for 'area_casa'".to_string()),
            ..EventVisitor::default()
        };

        let line = format_event(Level::WARN, "footprint_server::api", &visitor);
        assert!(line.contains("Input rejected"));
        assert!(line.contains("area_casa"));
    }

    #[test]
    fn test_plain_event_lists_fields() {
        let visitor = EventVisitor {
            message: Some("Server listening".to_string()),
            fields: vec![("addr", "0.0.0.0:5000".to_string())],
            ..EventVisitor::default()
        };

        let line = format_event(Level::INFO, "footprint_server::server", &visitor);
        assert!(line.contains("Server listening"));
        assert!(line.contains("footprint_server::server"));
        assert!(line.contains("0.0.0.0:5000"));
    }
}
