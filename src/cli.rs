use clap::Parser;

/// Meal client: analyze a meal against a running meal analyzer server.
#[derive(Parser, Debug)]
#[command(name = "meal-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the meal analyzer server.
    #[arg(long, env = "MEAL_ANALYZER_URL", default_value = "http://127.0.0.1:8080")]
    pub url: String,

    /// Expand the per-food breakdown table.
    #[arg(short, long)]
    pub breakdown: bool,

    /// Meal text, e.g. `idli, sambar, coconut chutney`.
    pub meal: Vec<String>,
}

impl Cli {
    pub fn meal_text(&self) -> String {
        self.meal.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_meal_words() {
        let cli = Cli::try_parse_from([
            "meal-client",
            "--url",
            "http://localhost:9000",
            "-b",
            "curd",
            "rice,",
            "vada",
        ])
        .unwrap();
        assert_eq!(cli.url, "http://localhost:9000");
        assert!(cli.breakdown);
        assert_eq!(cli.meal_text(), "curd rice, vada");
    }

    #[test]
    fn meal_may_be_omitted() {
        let cli = Cli::try_parse_from(["meal-client", "--url", "http://x"]).unwrap();
        assert_eq!(cli.meal_text(), "");
    }
}
