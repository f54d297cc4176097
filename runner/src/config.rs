use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;

use common::{
    maze::Algorithm,
    player::{DEFAULT_NAME, DEFAULT_SPRITE},
};

pub const DEFAULT_RADIUS: usize = 8;
pub const MAX_RADIUS: usize = 64;
pub const DEFAULT_STEP_MS: u64 = 60;
pub const DEFAULT_MAX_STEPS: usize = 100_000;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value {value:?} for {key}: {reason}")]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeSource {
    File(PathBuf),
    Generated {
        radius: usize,
        algorithm: Algorithm,
        seed: Option<u64>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub maze: MazeSource,
    pub step_delay: Duration,
    pub max_steps: usize,
    pub backtrack: bool,
    pub name: String,
    pub sprite: char,
    pub headless: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            maze: MazeSource::Generated {
                radius: DEFAULT_RADIUS,
                algorithm: Algorithm::default(),
                seed: None,
            },
            step_delay: Duration::from_millis(DEFAULT_STEP_MS),
            max_steps: DEFAULT_MAX_STEPS,
            backtrack: true,
            name: DEFAULT_NAME.to_string(),
            sprite: DEFAULT_SPRITE,
            headless: false,
        }
    }
}

impl Config {
    /// Reads `AQUARIUM_*` variables from the process environment, after
    /// loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let maze = match lookup("AQUARIUM_MAZE").filter(|path| !path.trim().is_empty()) {
            Some(path) => MazeSource::File(PathBuf::from(path.trim())),
            None => {
                let radius = parse(&lookup, "AQUARIUM_RADIUS", DEFAULT_RADIUS)?;
                if radius == 0 || radius > MAX_RADIUS {
                    return Err(ConfigError {
                        key: "AQUARIUM_RADIUS",
                        value: radius.to_string(),
                        reason: format!("must be between 1 and {MAX_RADIUS}"),
                    });
                }

                MazeSource::Generated {
                    radius,
                    algorithm: parse(&lookup, "AQUARIUM_ALGORITHM", Algorithm::default())?,
                    seed: match lookup("AQUARIUM_SEED") {
                        Some(_) => Some(parse(&lookup, "AQUARIUM_SEED", 0u64)?),
                        None => None,
                    },
                }
            }
        };

        let step_ms = parse(&lookup, "AQUARIUM_STEP_MS", DEFAULT_STEP_MS)?;

        let max_steps = parse(&lookup, "AQUARIUM_MAX_STEPS", DEFAULT_MAX_STEPS)?;
        if max_steps == 0 {
            return Err(ConfigError {
                key: "AQUARIUM_MAX_STEPS",
                value: "0".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let sprite = match lookup("AQUARIUM_SPRITE") {
            Some(value) => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(sprite), None) if !sprite.is_whitespace() => sprite,
                    _ => {
                        return Err(ConfigError {
                            key: "AQUARIUM_SPRITE",
                            value,
                            reason: "must be a single visible character".to_string(),
                        });
                    }
                }
            }
            None => defaults.sprite,
        };

        let name = lookup("AQUARIUM_NAME")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or(defaults.name);

        Ok(Self {
            maze,
            step_delay: Duration::from_millis(step_ms),
            max_steps,
            backtrack: parse_flag(&lookup, "AQUARIUM_BACKTRACK", defaults.backtrack)?,
            name,
            sprite,
            headless: parse_flag(&lookup, "AQUARIUM_HEADLESS", defaults.headless)?,
        })
    }
}

fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            key,
            reason: e.to_string(),
            value,
        }),
        None => Ok(default),
    }
}

fn parse_flag(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError {
            key,
            value,
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(config(&[]), Ok(Config::default()));
    }

    #[test]
    fn maze_path_takes_precedence_over_generation() {
        let config = config(&[("AQUARIUM_MAZE", "mazes/reef.txt"), ("AQUARIUM_RADIUS", "0")])
            .expect("radius is ignored when a maze file is given");
        assert_eq!(config.maze, MazeSource::File(PathBuf::from("mazes/reef.txt")));
    }

    #[test]
    fn overrides_are_applied() {
        let config = config(&[
            ("AQUARIUM_RADIUS", "12"),
            ("AQUARIUM_ALGORITHM", "binary-tree"),
            ("AQUARIUM_SEED", "99"),
            ("AQUARIUM_STEP_MS", "5"),
            ("AQUARIUM_MAX_STEPS", "500"),
            ("AQUARIUM_BACKTRACK", "off"),
            ("AQUARIUM_NAME", " Dory "),
            ("AQUARIUM_SPRITE", "D"),
            ("AQUARIUM_HEADLESS", "yes"),
        ])
        .expect("all values are valid");

        assert_eq!(
            config.maze,
            MazeSource::Generated {
                radius: 12,
                algorithm: Algorithm::BinaryTree,
                seed: Some(99),
            }
        );
        assert_eq!(config.step_delay, Duration::from_millis(5));
        assert_eq!(config.max_steps, 500);
        assert!(!config.backtrack);
        assert_eq!(config.name, "Dory");
        assert_eq!(config.sprite, 'D');
        assert!(config.headless);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = config(&[("AQUARIUM_RADIUS", "wide")]).expect_err("not a number");
        assert_eq!(err.key, "AQUARIUM_RADIUS");
        assert!(err.to_string().starts_with("invalid value \"wide\" for AQUARIUM_RADIUS"));

        let err = config(&[("AQUARIUM_RADIUS", "0")]).expect_err("too small");
        assert_eq!(err.key, "AQUARIUM_RADIUS");

        let err = config(&[("AQUARIUM_ALGORITHM", "kruskal")]).expect_err("unknown algorithm");
        assert_eq!(err.key, "AQUARIUM_ALGORITHM");

        let err = config(&[("AQUARIUM_BACKTRACK", "maybe")]).expect_err("not a flag");
        assert_eq!(err.key, "AQUARIUM_BACKTRACK");

        let err = config(&[("AQUARIUM_SPRITE", "ab")]).expect_err("two characters");
        assert_eq!(err.key, "AQUARIUM_SPRITE");

        let err = config(&[("AQUARIUM_MAX_STEPS", "0")]).expect_err("no steps");
        assert_eq!(err.key, "AQUARIUM_MAX_STEPS");
    }
}
