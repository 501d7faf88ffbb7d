use super::render::{
    print_messages, render_record, render_record_list, render_status, render_text_list,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, Cli, Commands,
    ConfigCommands, RowCommands,
};
use anyhow::{bail, Context, Result};
use clap::Parser;
use console::Term;
use mugmarkapp::api::{ConfigAction, Field, FieldEdit, MugmarkApi, RowList};
use mugmarkapp::commands::delete::label;
use mugmarkapp::config::CONFIG_KEYS;
use mugmarkapp::init::initialize;
use mugmarkapp::model::Kind;
use mugmarkapp::store::FsSlot;
use mugmarkapp::tags::TagInput;
use outstanding::{set_theme_detector, ColorMode};
use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: MugmarkApi<FsSlot>,
    confirm_delete: bool,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.help {
        print_subcommand_help(&cli.command);
        return Ok(());
    }
    if let Some(Commands::Help { command }) = &cli.command {
        match command {
            Some(name) => print_help_for_command(name),
            None => print_grouped_help(),
        }
        return Ok(());
    }

    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;
    tracing::debug!(
        command = cli.command.as_ref().map_or("list", Commands::name),
        kind = %ctx.api.kind(),
        "dispatching"
    );

    match cli.command {
        None => handle_list(&mut ctx, None),
        Some(Commands::List { search }) => handle_list(&mut ctx, search),
        Some(Commands::Show { selector }) => handle_show(&mut ctx, selector),
        Some(Commands::Select { selector }) => handle_select(&mut ctx, &selector),
        Some(Commands::New) => handle_new(&mut ctx),
        Some(Commands::Duplicate { selector }) => handle_duplicate(&mut ctx, selector),
        Some(Commands::Delete { selector }) => handle_delete(&mut ctx, selector, cli.yes),
        Some(Commands::Set { field, value }) => handle_set(&mut ctx, &field, value),
        Some(Commands::Row(cmd)) => handle_row(&mut ctx, cmd),
        Some(Commands::Status) => handle_status(&mut ctx),
        Some(Commands::Switch { kind }) => handle_switch(&mut ctx, &kind, cli.yes),
        Some(Commands::Import { file }) => {
            let kind = parse_kind(cli.kind.as_deref())?;
            handle_import(&mut ctx, &file, kind)
        }
        Some(Commands::Export { out }) => handle_export(&mut ctx, &out),
        Some(Commands::Manifest { out }) => handle_manifest(&mut ctx, &out),
        Some(Commands::Validate) => handle_validate(&mut ctx),
        Some(Commands::Config { action }) => handle_config(&mut ctx, action),
        Some(Commands::Help { .. }) => Ok(()),
    }
}

/// Logs go to stderr: `warn` by default, `debug` with `--verbose`, or whatever
/// `RUST_LOG` says.
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut ctx = initialize(&cwd, cli.data.clone())?;

    // `import` reads --kind as the kind of the file instead.
    if !matches!(cli.command, Some(Commands::Import { .. })) {
        if let Some(kind) = parse_kind(cli.kind.as_deref())? {
            let writes = cli.command.as_ref().is_some_and(Commands::writes_draft);
            ctx.api.use_kind(kind, cli.yes || !writes)?;
        }
    }

    set_theme_detector(|| match dark_light::detect() {
        dark_light::Mode::Dark => ColorMode::Dark,
        _ => ColorMode::Light,
    });

    Ok(AppContext {
        api: ctx.api,
        confirm_delete: ctx.config.confirm_delete,
        use_color: !cli.no_color && Term::stdout().features().colors_supported(),
    })
}

fn parse_kind(kind: Option<&str>) -> Result<Option<Kind>> {
    Ok(kind.map(str::parse::<Kind>).transpose()?)
}

fn handle_list(ctx: &mut AppContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.list(search.as_deref().unwrap_or(""))?;
    print!("{}", render_record_list(&result.listed_records, ctx.use_color));
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, selector: Option<String>) -> Result<()> {
    let result = ctx.api.show(selector.as_deref())?;
    for record in &result.listed_records {
        print!("{}", render_record(record, ctx.use_color));
    }
    Ok(())
}

fn handle_select(ctx: &mut AppContext, selector: &str) -> Result<()> {
    let result = ctx.api.select(selector)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_new(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.create()?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_duplicate(ctx: &mut AppContext, selector: Option<String>) -> Result<()> {
    let result = ctx.api.duplicate(selector.as_deref())?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selector: Option<String>, yes: bool) -> Result<()> {
    if ctx.confirm_delete && !yes {
        let target = ctx.api.resolve(selector.as_deref())?;
        let question = format!(
            "Delete {}? This cannot be undone.",
            label(&target.record, target.position - 1)
        );
        if !confirm(&question)? {
            println!("Cancelled.");
            return Ok(());
        }
    }
    let result = ctx.api.delete(selector.as_deref())?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

/// Asks on stderr and reads one line from stdin. Only `y`/`yes` confirm.
fn confirm(question: &str) -> Result<bool> {
    let mut stderr = std::io::stderr();
    write!(stderr, "{} [y/N] ", question)?;
    stderr.flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// `-` means "read the value from stdin", for multi-line text.
fn read_value(value: String) -> Result<String> {
    if value != "-" {
        return Ok(value);
    }
    if std::io::stdin().is_terminal() {
        bail!("`-` reads the value from stdin, but stdin is a terminal");
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Could not read value from stdin")?;
    Ok(buffer.trim_end_matches(&['\r', '\n'][..]).to_string())
}

fn handle_set(ctx: &mut AppContext, field: &str, value: String) -> Result<()> {
    let field: Field = field.parse()?;
    let value = read_value(value)?;
    let edit = match field {
        Field::Tags => FieldEdit::Tags(TagInput::from(value.as_str())),
        field => FieldEdit::Set { field, value },
    };
    let result = ctx.api.edit(edit)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_row(ctx: &mut AppContext, cmd: RowCommands) -> Result<()> {
    let edit = match cmd {
        RowCommands::Add { list } => FieldEdit::AddRow(list.parse()?),
        RowCommands::Remove { list, position } => FieldEdit::RemoveRow {
            list: list.parse()?,
            position,
        },
        RowCommands::Set {
            list,
            position,
            value,
            label,
            url,
        } => {
            let list: RowList = list.parse()?;
            let value = value.map(read_value).transpose()?;
            if list == RowList::Files {
                let url = url.or(value);
                if label.is_none() && url.is_none() {
                    bail!("Give --label and/or --url (or a URL value) for a files row");
                }
                FieldEdit::SetFile {
                    position,
                    label,
                    url,
                }
            } else {
                let Some(value) = value else {
                    bail!("Missing value for {} row {}", list, position);
                };
                FieldEdit::SetRow {
                    list,
                    position,
                    value,
                }
            }
        }
    };
    let result = ctx.api.edit(edit)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_status(ctx: &mut AppContext) -> Result<()> {
    let report = ctx.api.status()?;
    print!("{}", render_status(&report, ctx.use_color));
    Ok(())
}

fn handle_switch(ctx: &mut AppContext, kind: &str, yes: bool) -> Result<()> {
    let kind: Kind = kind.parse()?;
    let result = ctx.api.switch_kind(kind, yes)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &Path, kind: Option<Kind>) -> Result<()> {
    let result = ctx.api.import_file(file, kind)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_export(ctx: &mut AppContext, out: &Path) -> Result<()> {
    let result = ctx.api.export(out)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_manifest(ctx: &mut AppContext, out: &Path) -> Result<()> {
    let result = ctx.api.export_manifest(out)?;
    print_messages(&result.messages, ctx.use_color);
    Ok(())
}

fn handle_validate(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.validate()?;
    print_messages(&result.messages, ctx.use_color);
    let issues = result
        .messages
        .iter()
        .filter(|m| m.level == mugmarkapp::commands::MessageLevel::Error)
        .count();
    if issues > 0 {
        bail!("{} issue(s) block export", issues);
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, action: Option<ConfigCommands>) -> Result<()> {
    let action = match action {
        None => ConfigAction::ShowAll,
        Some(ConfigCommands::Get { key }) => ConfigAction::ShowKey(key),
        Some(ConfigCommands::Gen) => ConfigAction::Template,
    };
    let result = ctx.api.config_action(action)?;

    if let Some(config) = &result.config {
        let lines: Vec<String> = CONFIG_KEYS
            .iter()
            .filter_map(|key| config.get(key).map(|value| format!("{} = {}", key, value)))
            .collect();
        print!(
            "{}",
            render_text_list(&lines, "No configuration values.", ctx.use_color)
        );
    }
    print_messages(&result.messages, ctx.use_color);

    if result
        .messages
        .iter()
        .any(|m| m.level == mugmarkapp::commands::MessageLevel::Error)
    {
        bail!("Could not read configuration");
    }
    Ok(())
}
