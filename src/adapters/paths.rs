// SPDX-License-Identifier: MIT

//! `%NAME%` placeholder expansion

use crate::ports::PathResolver;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

/// Expands `%NAME%` tokens the way `cmd.exe` does.
///
/// Supplied tokens win over the process environment; names are matched
/// without regard to ASCII case. Unknown tokens are left in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenPathResolver;

impl TokenPathResolver {
    pub fn new() -> Self {
        Self
    }

    fn lookup(name: &str, tokens: &HashMap<String, String>) -> Option<String> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }
        tokens
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.clone())
            .or_else(|| env::var(name).ok())
    }

    /// Expand every known token in `template`
    pub fn expand(template: &str, tokens: &HashMap<String, String>) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            match after.find('%') {
                Some(end) => {
                    let name = &after[..end];
                    match Self::lookup(name, tokens) {
                        Some(value) => {
                            out.push_str(&value);
                            rest = &after[end + 1..];
                        }
                        None => {
                            // Keep the opening '%' and rescan from the closing one
                            out.push('%');
                            rest = after;
                        }
                    }
                }
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl PathResolver for TokenPathResolver {
    fn resolve(&self, template: &str, tokens: &HashMap<String, String>) -> PathBuf {
        PathBuf::from(Self::expand(template, tokens))
    }
}
