use crate::common::*;

#[doc = r#"
    Reads a TOML configuration file and deserializes it into the given
    structure type.

    1. Read the file at `file_path` into a string
    2. Parse the string with `toml::from_str()` into the generic type `T`
    3. Return an error when the file cannot be read or the TOML does not
       match the structure

    # Type Parameters
    * `T` - Structure type implementing `DeserializeOwned`

    # Arguments
    * `file_path` - Path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - The parsed structure on success
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Writes one rendered dashboard artifact (chart HTML, plot image, CSV
    download, summary JSON) into the given directory, creating the directory
    first when it does not exist yet.

    # Arguments
    * `dir` - Target directory for the artifact
    * `file_name` - File name of the artifact inside `dir`
    * `content` - Raw bytes to write

    # Returns
    * `Result<(), anyhow::Error>` - Ok on success, otherwise the IO error
"#]
pub fn write_artifact_file(dir: &Path, file_name: &str, content: &[u8]) -> Result<(), anyhow::Error> {
    fs::create_dir_all(dir).map_err(|e| {
        anyhow!(
            "[io_utils->write_artifact_file] Failed to create directory '{}': {}",
            dir.display(),
            e
        )
    })?;

    let path: PathBuf = dir.join(file_name);

    fs::write(&path, content).map_err(|e| {
        anyhow!(
            "[io_utils->write_artifact_file] Failed to write '{}': {}",
            path.display(),
            e
        )
    })?;

    Ok(())
}
