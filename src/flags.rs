use std::collections::BTreeMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FlagError {
    #[error("Flag {0} requires a value")]
    MissingValue(String),
    #[error("Unknown flag: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<&'static str, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: &'static str,
    pub long: &'static str,
    pub description: &'static str,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Self {
            short,
            long,
            description,
            takes_value: false,
            value: None,
        }
    }

    fn option(short: &'static str, long: &'static str, description: &'static str) -> Self {
        Self {
            takes_value: true,
            ..Self::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert("help", Flag::switch("-h", "--help", "Print this help message"));
        flags.insert(
            "version",
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "quiet",
            Flag::switch("-q", "--quiet", "Skip the welcome banner"),
        );
        flags.insert("debug", Flag::switch("-d", "--debug", "Enable debug logging"));
        flags.insert(
            "directory",
            Flag::option("-C", "--directory", "Start in the given directory"),
        );
        flags.insert(
            "no-color",
            Flag::switch("", "--no-color", "Render output without colors"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), FlagError> {
        let mut args = args.iter();
        while let Some(arg) = args.next() {
            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == flag.long || (!flag.short.is_empty() && arg == flag.short))
                .ok_or_else(|| FlagError::Unknown(arg.clone()))?;

            if flag.takes_value {
                let value = args
                    .next()
                    .ok_or_else(|| FlagError::MissingValue(arg.clone()))?;
                flag.value = Some(value.clone());
            } else {
                flag.value = Some("true".to_string());
            }
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.get_value(name).is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn help(&self) -> String {
        let mut out = String::from("Usage: tinta [OPTIONS]\n\nOptions:\n");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <value>", flag.long)
            } else {
                flag.long.to_string()
            };
            let short = if flag.short.is_empty() {
                "    ".to_string()
            } else {
                format!("{},", flag.short)
            };
            out.push_str(&format!("  {} {:<20} {}\n", short, long, flag.description));
        }
        out
    }

    pub fn print_help(&self) {
        print!("{}", self.help());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_switches() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-q", "--debug"])).expect("parse");
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("debug"));
        assert!(!flags.is_set("help"));
    }

    #[test]
    fn test_directory_value() {
        let mut flags = Flags::new();
        flags.parse(&args(&["-C", "/tmp"])).expect("parse");
        assert_eq!(flags.get_value("directory").map(String::as_str), Some("/tmp"));
    }

    #[test]
    fn test_directory_requires_value() {
        let mut flags = Flags::new();
        assert_eq!(
            flags.parse(&args(&["--directory"])),
            Err(FlagError::MissingValue("--directory".to_string()))
        );
    }

    #[test]
    fn test_unknown_flag() {
        let mut flags = Flags::new();
        assert_eq!(
            flags.parse(&args(&["--frobnicate"])),
            Err(FlagError::Unknown("--frobnicate".to_string()))
        );
    }

    #[test]
    fn test_help_lists_every_flag() {
        let help = Flags::new().help();
        for long in ["--help", "--version", "--quiet", "--debug", "--directory", "--no-color"] {
            assert!(help.contains(long), "missing {}", long);
        }
    }
}
