//! Build Huffman codes from a corpus and encode messages with them.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgGroup, Parser};
use huffcode::{encode, CodeTable, FrequencyTable, HuffmanTree};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["corpus", "corpus_file"])))]
struct Arguments {
    /// Training text the codes are derived from
    #[arg(short = 'c', long = "corpus")]
    corpus: Option<String>,

    /// Read the training text from a UTF-8 file
    #[arg(short = 'f', long = "corpus-file")]
    corpus_file: Option<PathBuf>,

    /// Message to encode, may be given more than once
    #[arg(short = 'm', long = "message")]
    messages: Vec<String>,

    /// Print the code table
    #[arg(long)]
    codes: bool,

    /// Print corpus size and encoded bit count
    #[arg(long)]
    stats: bool,
}

fn load_frequencies(args: &Arguments) -> huffcode::Result<FrequencyTable> {
    match &args.corpus_file {
        Some(path) => {
            log::info!("reading corpus from {}", path.display());
            FrequencyTable::from_reader(BufReader::new(File::open(path)?))
        }
        None => Ok(FrequencyTable::from_corpus(
            args.corpus.as_deref().unwrap_or_default(),
        )),
    }
}

fn run<W: Write>(args: &Arguments, out: &mut W) -> huffcode::Result<()> {
    let freqs = load_frequencies(args)?;
    let tree = HuffmanTree::build(&freqs)?;
    let codes = CodeTable::from_tree(&tree);

    // With nothing else requested, the listing is the output.
    if args.codes || (args.messages.is_empty() && !args.stats) {
        write!(out, "{codes}")?;
    }

    if args.stats {
        let bits = codes.weighted_length(&freqs);
        // A built tree has at least one leaf, so its weight is non-zero.
        let per_char = bits as f64 / tree.weight() as f64;
        writeln!(out, "characters: {}", tree.weight())?;
        writeln!(out, "distinct:   {}", freqs.len())?;
        writeln!(out, "tree depth: {}", tree.depth())?;
        writeln!(out, "bits:       {bits}")?;
        writeln!(out, "bits/char:  {per_char:.3}")?;
    }

    for message in &args.messages {
        writeln!(out, "{}", encode(message, &codes))?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Arguments::parse();
    match run(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
