use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "mugmark",
    bin_name = "mugmark",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Edit, check and export the Mug & Marker site data", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the autosaved draft
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Work on this kind for this invocation (worksheets, recipes, comics)
    #[arg(short, long, global = true, value_name = "KIND", help_heading = "Options")]
    pub kind: Option<String>,

    /// Diagnostic logging to stderr
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Plain output without colors
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Skip confirmations and allow discarding an unsaved draft of another kind
    #[arg(short, long, global = true, help_heading = "Options")]
    pub yes: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Records,
    Editing,
    Data,
    Misc,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Records => "Record Commands:",
            CommandGroup::Editing => "Editing Commands:",
            CommandGroup::Data => "Data Commands:",
            CommandGroup::Misc => "Miscellaneous:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "list" | "show" | "select" | "new" | "duplicate" | "delete" => {
                Some(CommandGroup::Records)
            }
            "set" | "row" => Some(CommandGroup::Editing),
            "status" | "switch" | "import" | "export" | "manifest" | "validate" => {
                Some(CommandGroup::Data)
            }
            "config" | "help" => Some(CommandGroup::Misc),
            _ => None,
        }
    }

    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Records,
            CommandGroup::Editing,
            CommandGroup::Data,
            CommandGroup::Misc,
        ]
    }
}

pub fn get_grouped_help() -> String {
    let cmd = Cli::command();
    let version = cmd.get_version().unwrap_or("unknown");

    let mut output = String::new();
    output.push_str(&format!("mugmark {version}\n"));
    output.push_str("Edit, check and export the Mug & Marker site data\n");
    output.push('\n');
    output.push_str("Usage: mugmark [OPTIONS] [COMMAND]\n");

    let subcommands: Vec<_> = cmd.get_subcommands().collect();
    for group in CommandGroup::all() {
        let group_cmds: Vec<_> = subcommands
            .iter()
            .filter(|sc| {
                !sc.is_hide_set() && CommandGroup::for_command(sc.get_name()) == Some(*group)
            })
            .collect();

        if !group_cmds.is_empty() {
            output.push('\n');
            output.push_str(&format!("{}\n", group.heading()));
            for sc in group_cmds {
                let about = sc.get_about().map(|s| s.to_string()).unwrap_or_default();
                output.push_str(&format!("  {:<12} {}\n", sc.get_name(), about));
            }
        }
    }

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str("      --data <DIR>   Directory holding the autosaved draft\n");
    output.push_str("  -k, --kind <KIND>  Work on this kind for this invocation\n");
    output.push_str("  -v, --verbose      Diagnostic logging to stderr\n");
    output.push_str("      --no-color     Plain output without colors\n");
    output.push_str("  -h, --help         Print help\n");
    output.push_str("  -V, --version      Print version\n");
    output.push('\n');
    output.push_str("Records are addressed by id, or by their position in `mugmark list`.\n");

    output
}

pub fn print_grouped_help() {
    print!("{}", get_grouped_help());
}

pub fn print_subcommand_help(command: &Option<Commands>) {
    match command {
        Some(command) => print_help_for_command(command.name()),
        None => print_grouped_help(),
    }
}

/// Prints help for a command by name, falling back to the grouped help.
pub fn print_help_for_command(name: &str) {
    let mut cmd = Cli::command();
    for subcmd in cmd.get_subcommands_mut() {
        if subcmd.get_name() == name {
            print!("{}", subcmd.render_help());
            return;
        }
    }

    eprintln!("Unknown command: {}", name);
    eprintln!();
    print_grouped_help();
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List records, optionally filtered
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Match against id, title and tags (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print a record (defaults to the selection)
    #[command(alias = "v", display_order = 2)]
    Show {
        /// Record id or list position
        selector: Option<String>,
    },

    /// Select the record that edits apply to
    #[command(display_order = 3)]
    Select {
        /// Record id or list position
        selector: String,
    },

    /// Add a blank record at the top and select it
    #[command(alias = "create", display_order = 4)]
    New,

    /// Copy a record (defaults to the selection)
    #[command(alias = "dup", display_order = 5)]
    Duplicate {
        /// Record id or list position
        selector: Option<String>,
    },

    /// Delete a record (defaults to the selection)
    #[command(alias = "rm", display_order = 6)]
    Delete {
        /// Record id or list position
        selector: Option<String>,
    },

    /// Set a field on the selected record ("-" reads the value from stdin)
    #[command(display_order = 10)]
    Set {
        /// Field name (id, title, image, alt, description, tags, ingredients,
        /// instructions, term, phonetic, pos, definitions)
        field: String,

        /// New value. Tags are comma-separated; ingredients and definitions
        /// take one entry per line.
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Edit rows of a list field (images, files, ingredients, definitions)
    #[command(subcommand, display_order = 11)]
    Row(RowCommands),

    /// Show the working document: kind, source, counts and field hint
    #[command(display_order = 20)]
    Status,

    /// Change the kind being edited
    #[command(display_order = 21)]
    Switch {
        /// worksheets, recipes or comics
        kind: String,
    },

    /// Load a JSON array file, replacing the current list (kind from --kind or the file name)
    #[command(display_order = 22)]
    Import {
        /// Path to a JSON file
        file: PathBuf,
    },

    /// Validate and write <kind>.json
    #[command(display_order = 23)]
    Export {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// Write the upload checklist for every referenced asset
    #[command(display_order = 24)]
    Manifest {
        /// Output directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },

    /// List every problem that would block export
    #[command(display_order = 25)]
    Validate,

    /// Show configuration, one key, or a template file
    #[command(display_order = 30)]
    Config {
        #[command(subcommand)]
        action: Option<ConfigCommands>,
    },

    /// Print help for mugmark or a subcommand
    #[command(display_order = 31)]
    Help {
        /// Subcommand to get help for
        command: Option<String>,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Show { .. } => "show",
            Commands::Select { .. } => "select",
            Commands::New => "new",
            Commands::Duplicate { .. } => "duplicate",
            Commands::Delete { .. } => "delete",
            Commands::Set { .. } => "set",
            Commands::Row(_) => "row",
            Commands::Status => "status",
            Commands::Switch { .. } => "switch",
            Commands::Import { .. } => "import",
            Commands::Export { .. } => "export",
            Commands::Manifest { .. } => "manifest",
            Commands::Validate => "validate",
            Commands::Config { .. } => "config",
            Commands::Help { .. } => "help",
        }
    }

    /// Whether the command can write the draft slot.
    pub fn writes_draft(&self) -> bool {
        !matches!(
            self,
            Commands::List { .. }
                | Commands::Show { .. }
                | Commands::Status
                | Commands::Export { .. }
                | Commands::Manifest { .. }
                | Commands::Validate
                | Commands::Config { .. }
                | Commands::Help { .. }
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum RowCommands {
    /// Append a blank row
    Add {
        /// images, files, ingredients or definitions
        list: String,
    },

    /// Remove the row at a 1-based position
    #[command(alias = "rm")]
    Remove { list: String, position: usize },

    /// Replace the row at a 1-based position. Files take --label and/or --url.
    Set {
        list: String,
        position: usize,

        #[arg(allow_hyphen_values = true)]
        value: Option<String>,

        /// File label (files only)
        #[arg(long)]
        label: Option<String>,

        /// File URL (files only; defaults to VALUE)
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print one setting
    Get { key: String },

    /// Print a commented mugmark.toml with every setting
    Gen,
}
