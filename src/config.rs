use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::style::Stylize;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::{default_colors::*, view::state::RacePolicy};

pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    bold:   bool,
    italic: bool,
    color:  crossterm::style::Color,
}

impl StyleConfig {
    fn style(&self, s: impl ToString) -> String {
        let mut s = s.to_string().with(self.color);
        if self.bold {
            s = s.bold();
        }
        if self.italic {
            s = s.italic();
        }
        s.to_string()
    }
}

pub trait Styleable {
    fn style(&self, c: &StyleConfig) -> String;
}

impl<T> Styleable for T
where
    T: ToString + std::fmt::Display,
{
    fn style(&self, c: &StyleConfig) -> String {
        c.style(self)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color:  COLOR_WHITE,
            bold:   false,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub prefix:            String,
    pub suffix:            String,
    pub description:       String,
    pub separator:         String,
    pub style_prefix:      StyleConfig,
    pub style_suffix:      StyleConfig,
    pub style_description: StyleConfig,
    pub style_separator:   StyleConfig,
    pub style_content:     StyleConfig,
}

impl OutputConfig {
    pub fn format_str(&self, content: impl ToString) -> String {
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        let content = content.to_string().style(&self.style_content);
        if self.description.is_empty() {
            return format!("{prefix}{content}{suffix}");
        }
        let description = self.description.style(&self.style_description);
        format!("{prefix}{description} {content}{suffix}")
    }

    pub fn format_vec<T>(&self, content: &[T]) -> String
    where
        T: ToString + std::fmt::Display,
    {
        let separator = self.separator.style(&self.style_separator);
        let joined = content
            .iter()
            .map(|x| x.style(&self.style_content))
            .collect::<Vec<String>>()
            .join(&separator);
        let prefix = self.prefix.style(&self.style_prefix);
        let suffix = self.suffix.style(&self.style_suffix);
        if self.description.is_empty() {
            return format!("{prefix}{joined}{suffix}");
        }
        let description = self.description.style(&self.style_description);
        format!("{prefix}{description} {joined}{suffix}")
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prefix:            "".into(),
            suffix:            "".into(),
            description:       "".into(),
            separator:         ", ".into(),
            style_prefix:      StyleConfig::default(),
            style_suffix:      StyleConfig::default(),
            style_description: StyleConfig {
                italic: true,
                ..StyleConfig::default()
            },
            style_separator:   StyleConfig::default(),
            style_content:     StyleConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_base:             String,
    pub covers_base:          String,
    pub placeholder_image:    String,
    pub default_subject:      String,
    pub result_limit:         u32,
    pub race_policy:          RacePolicy,
    pub request_timeout_secs: Option<u64>,
    pub probe_covers:         bool,
    pub display_name:         String,
    pub history_file:         PathBuf,
    pub server_address:       String,
    pub output_header:        OutputConfig,
    pub output_index:         OutputConfig,
    pub output_title:         OutputConfig,
    pub output_author:        OutputConfig,
    pub output_published:     OutputConfig,
    pub output_cover:         OutputConfig,
    pub output_target:        OutputConfig,
    pub output_description:   OutputConfig,
    pub output_subject:       OutputConfig,
    pub output_place:         OutputConfig,
    pub output_link:          OutputConfig,
    pub output_excerpt:       OutputConfig,
    pub output_dewey:         OutputConfig,
    pub output_section:       OutputConfig,
    pub output_status:        OutputConfig,
    pub output_error:         OutputConfig,
}

impl Config {
    pub fn default_as_string() -> Result<String> {
        Ok(toml::to_string(&Self::default())?)
    }

    /// Defaults, then the config file, then `FOLIO_*` environment variables.
    pub fn figment(path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("FOLIO_"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let mut config: Self = figment.extract()?;
        config.history_file = shellexpand::path::tilde(&config.history_file).into_owned();
        Ok(config)
    }

    pub fn read_config() -> Result<Self> {
        // A `.env` file may point us at a different config file.
        let _ = dotenvy::dotenv();
        let path = std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.into());
        Self::from_figment(Self::figment(path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base:             "https://openlibrary.org".into(),
            covers_base:          "https://covers.openlibrary.org".into(),
            placeholder_image:    "https://via.placeholder.com/150".into(),
            default_subject:      "fiction".into(),
            result_limit:         10,
            race_policy:          RacePolicy::default(),
            request_timeout_secs: None,
            probe_covers:         false,
            display_name:         "Alex".into(),
            history_file:         PathBuf::from("~/.local/share/folio/history.txt"),
            server_address:       "127.0.0.1:3000".into(),
            output_header:        OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_HEADER,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_index:         OutputConfig {
                prefix: "[".into(),
                suffix: "]".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_title:         OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_TITLE,
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_author:        OutputConfig {
                description: "Author(s):".into(),
                style_content: StyleConfig {
                    color: COLOR_AUTHOR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_published:     OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_PUBLISHED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_cover:         OutputConfig {
                description: "Cover:".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_target:        OutputConfig {
                prefix: "(".into(),
                suffix: ")".into(),
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_description:   OutputConfig::default(),
            output_subject:       OutputConfig {
                prefix: "  - ".into(),
                style_content: StyleConfig {
                    color: COLOR_SUBJECT,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_place:         OutputConfig {
                prefix: "  - ".into(),
                style_content: StyleConfig {
                    color: COLOR_PLACE,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_link:          OutputConfig {
                prefix: "  - ".into(),
                style_content: StyleConfig {
                    color: COLOR_LINK,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_excerpt:       OutputConfig {
                prefix: "\"".into(),
                suffix: "\"".into(),
                style_content: StyleConfig {
                    color: COLOR_EXCERPT,
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_dewey:         OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_DEWEY,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_section:       OutputConfig {
                style_content: StyleConfig {
                    bold: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_status:        OutputConfig {
                style_content: StyleConfig {
                    color: COLOR_DIMMED,
                    italic: true,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
            output_error:         OutputConfig {
                description: "Error".into(),
                style_content: StyleConfig {
                    color: COLOR_ERROR,
                    ..StyleConfig::default()
                },
                ..OutputConfig::default()
            },
        }
    }
}
