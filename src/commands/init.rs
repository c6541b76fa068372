use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# debug-decoders configuration

# A signature is a decoder when its first token is this type.
decoder_type = "Json.Decode.Decoder"

# A function is a view when it returns this type.
view_type = "Html.Html"

# Name of the generated module, written to <project>/<name>.elm
module_name = "DebugDecoders"

# Tool that prints the project's module interfaces as JSON
extractor = "elm-interface-to-json"

# File that must exist in the project directory
manifest = "elm-package.json"
"#;

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");

    Ok(())
}
