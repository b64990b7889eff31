use crate::config::Config;

/// Tells the view lifecycle whether a parsed response should be shown as
/// results or as "nothing found".
pub trait ResultSet {
    fn is_empty_result(&self) -> bool;
}

/// Terminal rendering with the user's output styles applied.
pub trait DisplayTerminal {
    fn fmt(&self, f: &mut String, config: &Config) -> std::fmt::Result;

    fn fmt_to_string(&self, config: &Config) -> Result<String, std::fmt::Error> {
        let mut s = String::new();
        DisplayTerminal::fmt(self, &mut s, config)?;
        Ok(s)
    }
}
