// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fmt::Write;

/// Rule drawn above and below section titles.
pub(crate) const RULE_WIDTH: usize = 50;

/// Line-oriented text buffer. Every line ends with `\n`.
#[derive(Debug, Default)]
pub(crate) struct TextBlock {
    buf: String,
}

impl TextBlock {
    pub(crate) const fn new() -> Self {
        Self { buf: String::new() }
    }

    pub(crate) fn line(&mut self, text: &str) {
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    pub(crate) fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Writes `prefix`, then `value` left-aligned in `width` columns, then `suffix`.
    pub(crate) fn padded(&mut self, prefix: &str, value: &str, width: usize, suffix: &str) {
        let _ = writeln!(self.buf, "{prefix}{value:<width$}{suffix}");
    }

    pub(crate) fn append(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

/// Formats an amount to cents.
pub(crate) fn money(amount: f64) -> String {
    format!("{amount:.2}")
}

/// Formats a quantity with six decimals, as used for miles, rates and ratings.
pub(crate) fn fixed6(value: f64) -> String {
    format!("{value:.6}")
}

pub(crate) fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}
