//! Runtime settings read from `PROTPARAM_*` environment variables

use std::io::IsTerminal;

use crate::protein::ResiduePolicy;

pub const LOG_LEVEL_VAR: &str = "PROTPARAM_LOG_LEVEL";
pub const RESIDUES_VAR: &str = "PROTPARAM_RESIDUES";
pub const INTERFACE_VAR: &str = "PROTPARAM_INTERFACE";

/// Which host drives the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interface {
    /// Full-screen terminal UI
    Tui,
    /// Prompt, read a line, print a report
    Line,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    pub residue_policy: ResiduePolicy,
    pub interface: Interface,
}

impl Settings {
    pub fn from_env() -> Settings {
        let interactive = std::io::stdin().is_terminal();
        Settings::from_lookup(|key| std::env::var(key).ok(), interactive)
    }

    /// Build settings from an arbitrary variable source
    ///
    /// `interactive` picks the interface when none is configured.
    pub fn from_lookup<F>(lookup: F, interactive: bool) -> Settings
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup(LOG_LEVEL_VAR)
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase();
        let log_level = match log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => log_level,
            _ => {
                eprintln!("Invalid log level '{log_level}', defaulting to 'info'");
                "info".to_string()
            }
        };

        let residue_policy = match lookup(RESIDUES_VAR).map(|v| v.to_lowercase()).as_deref() {
            None | Some("strict") => ResiduePolicy::Strict,
            Some("lenient") => ResiduePolicy::Lenient,
            Some(other) => {
                eprintln!("Invalid residue policy '{other}', defaulting to 'strict'");
                ResiduePolicy::Strict
            }
        };

        let default_interface = if interactive {
            Interface::Tui
        } else {
            Interface::Line
        };
        let interface = match lookup(INTERFACE_VAR).map(|v| v.to_lowercase()).as_deref() {
            None => default_interface,
            Some("tui") => Interface::Tui,
            Some("line") => Interface::Line,
            Some(other) => {
                eprintln!("Invalid interface '{other}', using the default");
                default_interface
            }
        };

        Settings {
            log_level,
            residue_policy,
            interface,
        }
    }

    /// Filter string handed to `env_logger`
    pub fn log_filter(&self) -> String {
        format!("protparam={}", self.log_level)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::from_lookup(|_| None, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)], interactive: bool) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned(), interactive)
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.log_level, "info");
        assert_eq!(s.residue_policy, ResiduePolicy::Strict);
        assert_eq!(s.interface, Interface::Line);
        assert_eq!(s.log_filter(), "protparam=info");
    }

    #[test]
    fn test_interface_follows_terminal() {
        assert_eq!(settings(&[], true).interface, Interface::Tui);
        assert_eq!(settings(&[(INTERFACE_VAR, "line")], true).interface, Interface::Line);
        assert_eq!(settings(&[(INTERFACE_VAR, "TUI")], false).interface, Interface::Tui);
        assert_eq!(settings(&[(INTERFACE_VAR, "gui")], false).interface, Interface::Line);
    }

    #[test]
    fn test_values_are_case_insensitive() {
        let s = settings(&[(LOG_LEVEL_VAR, "DEBUG"), (RESIDUES_VAR, "Lenient")], false);
        assert_eq!(s.log_level, "debug");
        assert_eq!(s.residue_policy, ResiduePolicy::Lenient);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let s = settings(&[(LOG_LEVEL_VAR, "loud"), (RESIDUES_VAR, "maybe")], false);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.residue_policy, ResiduePolicy::Strict);
    }
}
