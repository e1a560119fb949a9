use docscope_core::config::RenderOptions;
use docscope_core::input::load_project;
use docscope_core::phase::{self, DocumentationPhase};
use std::path::PathBuf;
use tracing::info;

pub struct PlanArgs {
    pub input: PathBuf,
    pub entry_point: Option<String>,
    pub no_readme: bool,
    pub pretty: bool,
}

/// Command line flags win over options stored in the project file.
pub fn merge_options(stored: Option<RenderOptions>, args: &PlanArgs) -> RenderOptions {
    let mut options = stored.unwrap_or_default();
    if let Some(entry_point) = &args.entry_point {
        options.entry_point = Some(entry_point.clone());
    }
    if args.no_readme {
        options.readme = false;
    }
    options
}

pub fn render(args: &PlanArgs) -> Result<String, Box<dyn std::error::Error>> {
    let (mut tree, stored) = load_project(&args.input)?;
    let options = merge_options(stored, args);
    info!("Planning {} with {:?}", args.input.display(), options);

    let output = phase::run(&DocumentationPhase::new(options), &mut tree);
    let json = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let json = render(&args)?;
    println!("{}", json);
    Ok(())
}
