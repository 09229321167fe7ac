use clap::ValueEnum;
use sharpq_config::OutputConfig;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

impl OutputFormat {
    /// Parse the `output.format` config value. Config validation already
    /// restricts it to the three known names.
    #[must_use]
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<String>,
}

/// How command results are printed once flags and config are merged.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub limit: Option<u32>,
}

impl GlobalFlags {
    /// Flags win over the `[output]` config section.
    #[must_use]
    pub fn render_options(&self, config: &OutputConfig) -> RenderOptions {
        RenderOptions {
            format: self
                .format
                .or_else(|| OutputFormat::from_config(&config.format))
                .unwrap_or(OutputFormat::Json),
            limit: self.limit.or(config.limit),
        }
    }
}
