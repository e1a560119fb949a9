use docscope_core::input::ProjectInput;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(ProjectInput);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
