use std::fs::File;
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadNamesError {
    #[error("empty name in line {0}")]
    EmptyName(usize),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads one node name per line. The name in line `i` (counting from zero) belongs to node `i`.
pub fn read_names<P>(path: P) -> Result<Vec<String>, ReadNamesError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_names(std::io::BufReader::new(file))
}

pub(crate) fn parse_names<R: BufRead>(reader: R) -> Result<Vec<String>, ReadNamesError> {
    let mut names: Vec<String> = vec![];
    for (i, line) in reader.lines().enumerate() {
        let name = line?.trim().to_string();
        if name.is_empty() {
            return Err(ReadNamesError::EmptyName(i));
        }
        names.push(name);
    }
    Ok(names)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(parse_names("AVAL\n AVAR \nPVCL".as_bytes()).unwrap(), ["AVAL", "AVAR", "PVCL"]);
        assert!(matches!(parse_names("AVAL\n\nPVCL".as_bytes()), Err(ReadNamesError::EmptyName(1))));
    }
}
