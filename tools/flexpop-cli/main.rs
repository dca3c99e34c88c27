use clap::Parser;
use flexpop::data::FormSample;
use flexpop::prelude::*;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Prints every payload the popup would send.
struct PrintSink;

impl PrintSink {
    fn print<T: Serialize>(label: &str, payload: &T) {
        let json = serde_json::to_string_pretty(payload)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode payload: {}", e)));
        println!("  -> {} payload:\n{}", label, json);
    }
}

impl SubmissionSink for PrintSink {
    fn optin_submit(&mut self, payload: &OptinPayload) {
        Self::print("optin", payload);
    }

    fn discount_primary_submit(&mut self, payload: &BasePayload) {
        Self::print("discount primary", payload);
    }

    fn discount_secondary_submit(&mut self, payload: &DiscountSecondaryPayload) {
        Self::print("discount secondary", payload);
    }
}

/// Resolve and exercise a flexible popup outside the browser
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to an opt-in flow node JSON file (or a bare content document with --content)
    path: String,

    /// Treat the file as a bare flexible content document
    #[arg(long)]
    content: bool,

    /// Node type used with --content (e.g. "optin", "discount", "quiz")
    #[arg(long, default_value = "optin")]
    node_type: String,

    /// Viewport width in pixels
    #[arg(short, long)]
    width: Option<u32>,

    /// Force a breakpoint (default, max-sm, max-md, max-lg, max-xl, max-2xl)
    #[arg(short, long)]
    breakpoint: Option<String>,

    /// Resolve container sizes as the preview does
    #[arg(long)]
    preview: bool,

    /// Optional path to a JSON object of field values keyed by component id
    #[arg(long)]
    form_data: Option<String>,

    /// Click this component after filling in the form
    #[arg(long)]
    click: Option<String>,

    /// Print the resolved tree as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Prompt for every visible input's value
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let total_start = Instant::now();

    // --- 1. Loading ---
    let node = load_node(&cli);
    let override_bp = cli.breakpoint.as_deref().map(|bp| {
        bp.parse::<Breakpoint>()
            .unwrap_or_else(|e| exit_with_error(&e.to_string()))
    });

    let mut builder = PopupInstance::builder(node, "cli-session").preview_mode(cli.preview);
    if let Some(width) = cli.width {
        builder = builder.viewport_width(width);
    }
    if let Some(bp) = override_bp {
        builder = builder.override_breakpoint(bp);
    }
    let mut popup = builder.build();

    // --- 2. Resolution ---
    let resolve_start = Instant::now();
    let Some(tree) = popup.resolve() else {
        exit_with_error("The node has no flexible content to render.");
    };
    let resolve_duration = resolve_start.elapsed();

    if cli.json {
        let json = serde_json::to_string_pretty(&tree)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to encode tree: {}", e)));
        println!("{}", json);
    } else {
        println!("\nResolved popup at breakpoint {}:", popup.breakpoint());
        print!("{}", TreeFormatter::format_tree(&tree));
        if let Some(style) = popup.container_style() {
            println!("Container: {}", serde_json::Value::Object(style));
        }
        if cli.preview {
            if let Some(chrome) = popup.chrome() {
                println!("\n{}", chrome.media_query_css());
            }
        }
    }

    // --- 3. Form input ---
    if let Some(path) = &cli.form_data {
        let sample = FormSample::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load form data from '{}': {}", path, e))
        });
        for (field, value) in sample.iter() {
            popup.set_field(field, value);
        }
    }
    if cli.human {
        prompt_for_fields(&mut popup, &tree);
    }

    // --- 4. Click ---
    if let Some(component_id) = &cli.click {
        println!("\nClicking '{}'...", component_id);
        match popup.click(component_id, &mut PrintSink) {
            ClickOutcome::Submitted(_) => println!("  -> Submitted"),
            ClickOutcome::Rejected(errors) => {
                println!("  -> Rejected");
                for (field, message) in &errors {
                    println!("     {}: {}", field, message);
                }
            }
            ClickOutcome::Dismissed => println!("  -> Popup dismissed"),
            ClickOutcome::Inert => println!("  -> Nothing happens"),
        }
    }

    let total_duration = total_start.elapsed();
    if !cli.json {
        println!("\n--- Summary ---");
        println!("Sections:        {}", tree.sections.len());
        println!("Components:      {}", tree.components().count());
        println!("Form Fields:     {}", popup.form_state().form_data.len());
        println!("Resolution:      {:?}", resolve_duration);
        println!("Total Execution: {:?}", total_duration);
        println!();
    }
}

fn load_node(cli: &Cli) -> OptinFlowNode {
    if cli.content {
        let content = FlexibleContent::from_file(&cli.path)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        return OptinFlowNode::new(0, "local", &cli.node_type).with_content(content);
    }
    let json = std::fs::read_to_string(&cli.path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read node file '{}': {}", cli.path, e))
    });
    OptinFlowNode::from_json(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse node: {}", e)))
}

/// Asks for a value for every rendered input component.
fn prompt_for_fields(popup: &mut PopupInstance, tree: &ResolvedTree) {
    println!("\n--- Form Input ---");
    let inputs: Vec<_> = tree
        .components()
        .filter_map(|c| match &c.variant {
            ComponentVariant::Input(props) => Some((c.id.clone(), props.placeholder.clone())),
            _ => None,
        })
        .collect();

    for (id, placeholder) in inputs {
        let current = popup.form_state().value(&id).map(str::to_string);
        let prompt = match placeholder {
            Some(p) => format!("{} ({})", id, p),
            None => id.clone(),
        };
        let value = prompt_for_input(&prompt, current.as_deref());
        popup.set_field(&id, &value);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    let _ = io::stdout().flush();

    io::stdin()
        .read_line(&mut line)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read line: {}", e)));
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
