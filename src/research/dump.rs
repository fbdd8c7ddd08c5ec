//! Text dumps of the training state, appended to
//! `labels.txt` and `weights.txt` in a directory.
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::InstanceTable;

const SEPARATOR: &str = "        ";


/// Appends the label matrix of `table` to `dir/labels.txt`,
/// one instance per line.
pub fn labels<P: AsRef<Path>>(dir: P, table: &InstanceTable)
    -> io::Result<()>
{
    let mut out = open(dir.as_ref(), "labels.txt")?;
    writeln!(
        out,
        "---------------- Labels after initialization of the raw data ----------------"
    )?;
    for y in table.label_matrix() {
        for yk in y {
            write!(out, "{yk}{SEPARATOR}")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "\n")?;
    out.flush()
}


/// Appends the weight matrix of `table` to `dir/weights.txt`
/// under a header naming `iteration`.
pub fn weights<P: AsRef<Path>>(dir: P, iteration: usize, table: &InstanceTable)
    -> io::Result<()>
{
    let mut out = open(dir.as_ref(), "weights.txt")?;
    writeln!(out, "---------------- Iteration {iteration} ----------------")?;
    for w in table.weight_matrix() {
        for wk in w {
            write!(out, "{wk:.10}{SEPARATOR}")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "\n")?;
    out.flush()
}


fn open(dir: &Path, name: &str) -> io::Result<BufWriter<fs::File>> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(name))?;
    Ok(BufWriter::new(file))
}
