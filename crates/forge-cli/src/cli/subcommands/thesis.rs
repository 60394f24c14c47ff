use clap::{Args, Subcommand};

/// Thesis proposal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThesisCommands {
    /// List your theses.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a thesis by ID.
    Get { id: String },
    /// Submit a new thesis (optionally pre-filled from an existing one).
    New(ThesisNewArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ThesisNewArgs {
    /// Topic name (at least 5 characters).
    #[arg(long)]
    pub topic: Option<String>,

    /// Main research area.
    #[arg(long)]
    pub main_area: Option<String>,

    /// Secondary research area.
    #[arg(long)]
    pub secondary_area: Option<String>,

    /// Topic description (at least 20 characters).
    #[arg(long)]
    pub description: Option<String>,

    /// External link (a valid URL).
    #[arg(long)]
    pub link: Option<String>,

    /// Personal interest rating, 1-5.
    #[arg(long)]
    pub interest: Option<i64>,

    /// Business potential rating, 1-5.
    #[arg(long)]
    pub business: Option<i64>,

    /// Open source contribution rating, 1-5.
    #[arg(long)]
    pub open_source: Option<i64>,

    /// Scientific value rating, 1-5.
    #[arg(long)]
    pub science: Option<i64>,

    /// Pre-fill every field from an existing thesis before applying flags.
    #[arg(long)]
    pub from: Option<String>,
}
