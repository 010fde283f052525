//! Pointer scripts: whitespace separated steps such as `d:40 m:120 u:300`.
//!
//! | step      | meaning                               |
//! |-----------|---------------------------------------|
//! | `d:<x>`   | pointer down at x                     |
//! | `m:<x>`   | pointer move to x                     |
//! | `u:<x>`   | pointer up at x                       |
//! | `c`       | gesture cancelled                     |
//! | `l:<w>`   | relayout to a container of width w    |

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use scaleview_ui::{PointerState, Px};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Down(Px),
    Move(Px),
    Up(Px),
    Cancel,
    Layout(Px),
}

impl Step {
    /// Queues pointer steps on `pointer`. Returns `false` for steps that are
    /// not pointer input.
    pub fn queue(&self, pointer: &mut PointerState) -> bool {
        match *self {
            Step::Down(x) => pointer.handle_pointer_down(x),
            Step::Move(x) => pointer.handle_pointer_move(x),
            Step::Up(x) => pointer.handle_pointer_up(x),
            Step::Cancel => pointer.handle_pointer_cancel(),
            Step::Layout(_) => return false,
        }
        true
    }
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "c" {
            return Ok(Step::Cancel);
        }
        let (kind, value) = s
            .split_once(':')
            .with_context(|| format!("step `{s}` is missing `:<value>`"))?;
        let value: f32 = value
            .parse()
            .with_context(|| format!("step `{s}` has an invalid number"))?;
        if !value.is_finite() {
            bail!("step `{s}` has a non-finite value");
        }
        let x = Px(value);
        Ok(match kind {
            "d" => Step::Down(x),
            "m" => Step::Move(x),
            "u" => Step::Up(x),
            "l" => Step::Layout(x),
            other => bail!("unknown step kind `{other}` in `{s}`"),
        })
    }
}

pub fn parse(script: &str) -> Result<Vec<Step>> {
    script.split_whitespace().map(str::parse).collect()
}
