//! Output assembly for the two targets: raw ANSI lines or a Verilog task.

use std::fmt;

use super::encode::display_statement;
use super::RenderError;

/// Default Verilog task name.
pub const DEFAULT_TASK_NAME: &str = "display_image";

/// Where the rendered lines end up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Plain lines with ANSI escapes
    Ansi,
    /// A Verilog task with one `$display` per line
    Verilog { task: String },
}

impl OutputTarget {
    /// A Verilog target, validating the task name.
    ///
    /// The name becomes a bare identifier in `task <name>;`, so it must be a
    /// Verilog simple identifier. Names containing backslashes, quotes or
    /// whitespace are rejected rather than escaped.
    pub fn verilog(task: impl Into<String>) -> Result<Self, RenderError> {
        let task = task.into();
        if !is_simple_identifier(&task) {
            return Err(RenderError::InvalidTaskName(task));
        }
        Ok(OutputTarget::Verilog { task })
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputTarget::Ansi => "ansi",
            OutputTarget::Verilog { .. } => "verilog",
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn is_simple_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Join encoded lines into the final text for `target`.
pub fn assemble(lines: &[String], target: &OutputTarget) -> String {
    match target {
        OutputTarget::Ansi => {
            let mut out = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
            for line in lines {
                out.push_str(line);
                out.push('\n');
            }
            out
        }
        OutputTarget::Verilog { task } => {
            let mut out = format!("task {};\nbegin\n", task);
            for line in lines {
                out.push_str("  ");
                out.push_str(&display_statement(line));
                out.push('\n');
            }
            out.push_str("end\nendtask\n");
            out
        }
    }
}

/// Comment header written above a Verilog file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileBanner {
    /// Source file name (no directories)
    pub source_name: String,
    pub source_size: (u32, u32),
    /// Output size in characters
    pub output_size: (u32, u32),
    pub format: &'static str,
    pub resize_method: String,
    pub sharpen: String,
    pub denoise: u8,
    pub saturation: f32,
    pub contrast: f32,
}

const BANNER_RULE: &str =
    "//============================================================================";

impl fmt::Display for FileBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", BANNER_RULE)?;
        writeln!(f, "// Auto-generated image display code - {}", self.source_name)?;
        writeln!(f, "// Source size: {}x{}", self.source_size.0, self.source_size.1)?;
        writeln!(f, "// Output size: {}x{}", self.output_size.0, self.output_size.1)?;
        writeln!(f, "// Output format: {}", self.format)?;
        writeln!(
            f,
            "// Options: resize_method={} sharpen={}",
            self.resize_method, self.sharpen
        )?;
        writeln!(
            f,
            "//          denoise={} saturation={:?} contrast={:?}",
            self.denoise, self.saturation, self.contrast
        )?;
        writeln!(f, "{}", BANNER_RULE)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_lines_newline_terminated() {
        let lines = vec!["ab".to_string(), "cd".to_string()];
        assert_eq!(assemble(&lines, &OutputTarget::Ansi), "ab\ncd\n");
    }

    #[test]
    fn test_verilog_wrapper() {
        let lines = vec!["a\"b".to_string()];
        let target = OutputTarget::verilog("display_image").unwrap();
        assert_eq!(
            assemble(&lines, &target),
            "task display_image;\nbegin\n  $display(\"a\\\"b\");\nend\nendtask\n"
        );
    }

    #[test]
    fn test_verilog_empty_body() {
        let target = OutputTarget::verilog("t").unwrap();
        assert_eq!(assemble(&[], &target), "task t;\nbegin\nend\nendtask\n");
    }

    #[test]
    fn test_task_name_validation() {
        assert!(OutputTarget::verilog("show_logo").is_ok());
        assert!(OutputTarget::verilog("_x$1").is_ok());
        assert!(matches!(
            OutputTarget::verilog("bad\\name"),
            Err(RenderError::InvalidTaskName(_))
        ));
        assert!(OutputTarget::verilog("with space").is_err());
        assert!(OutputTarget::verilog("1abc").is_err());
        assert!(OutputTarget::verilog("quote\"").is_err());
        assert!(OutputTarget::verilog("").is_err());
    }

    #[test]
    fn test_banner_layout() {
        let banner = FileBanner {
            source_name: "logo.png".to_string(),
            source_size: (640, 480),
            output_size: (60, 22),
            format: "verilog",
            resize_method: "linear_bicubic".to_string(),
            sharpen: "light".to_string(),
            denoise: 0,
            saturation: 1.0,
            contrast: 1.1,
        };
        let text = banner.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], BANNER_RULE);
        assert_eq!(lines[1], "// Auto-generated image display code - logo.png");
        assert_eq!(lines[2], "// Source size: 640x480");
        assert_eq!(lines[3], "// Output size: 60x22");
        assert_eq!(lines[6], "//          denoise=0 saturation=1.0 contrast=1.1");
        assert!(text.ends_with(&format!("{}\n\n", BANNER_RULE)));
    }
}
