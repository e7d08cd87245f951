use owo_colors::OwoColorize;

/// Width of the label column for result lines
pub const LABEL_WIDTH: usize = 34;

/// Width of the label column for timing lines
pub const TIMING_WIDTH: usize = 15;

/// Standard output formatting for the CLI
#[derive(Debug, Default)]
pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    /// Print a title line with the requested interval highlighted
    pub fn title(&self, title: &str, interval: &str) {
        println!();
        println!("{} {}:", title, interval.yellow());
        println!();
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", "✔".bright_green(), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        println!("{} {}", "✗".bright_red(), message);
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        println!();
        println!("{}", title.bright_cyan().bold());
        println!("{}", "─".repeat(40).dimmed());
    }

    /// Print a labelled quantity: `Label symbol    value`
    pub fn quantity(&self, label: &str, symbol: Option<&str>, value: &str) {
        println!("{}{}", self.label(label, symbol), value.yellow());
    }

    /// Print a labelled prime: `Label symbol    p (nth prime)`
    pub fn prime(&self, label: &str, symbol: Option<&str>, value: u64, ordinal: &str) {
        println!(
            "{}{} ({} prime)",
            self.label(label, symbol),
            value.magenta(),
            ordinal.green()
        );
    }

    /// Print a labelled count followed by free-form detail
    pub fn count(&self, label: &str, symbol: Option<&str>, count: usize, detail: &str) {
        if detail.is_empty() {
            println!("{}{}", self.label(label, symbol), count.yellow());
        } else {
            println!("{}{} {}", self.label(label, symbol), count.yellow(), detail);
        }
    }

    /// Print a list of primes
    pub fn primes(&self, list: &str) {
        println!("{}", list.magenta());
        println!();
    }

    /// Print one phase timing
    pub fn timing(&self, label: &str, millis: f64) {
        println!("{:<width$}{} ms", label.blue(), millis.blue(), width = TIMING_WIDTH);
    }

    /// Print the total timing
    pub fn timing_total(&self, label: &str, millis: f64) {
        println!(
            "{:<width$}{} ms",
            label.blue().bold(),
            millis.blue().bold(),
            width = TIMING_WIDTH
        );
    }

    /// Print a key-value pair (indented)
    pub fn kv(&self, key: &str, value: &str) {
        println!("  {} {}", format!("{}:", key).dimmed(), value);
    }

    /// Label padded to the label column, symbol in green
    fn label(&self, label: &str, symbol: Option<&str>) -> String {
        let visible = label.chars().count() + symbol.map_or(0, |s| s.chars().count() + 1);
        let padding = " ".repeat(LABEL_WIDTH.saturating_sub(visible).max(1));
        match symbol {
            Some(symbol) => format!("{} {}{}", label, symbol.green(), padding),
            None => format!("{}{}", label, padding),
        }
    }
}
