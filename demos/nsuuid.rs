//! Simple command that prints one name-based UUID string per name given as an argument or, with
//! no names given, per line read from standard input

use nsuuid::{Generator, NameHash, Uuid};
use std::{env, io, io::BufRead, io::Write, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Options {
    md5: bool,
    namespace: Uuid,
    names: Vec<String>,
}

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [--md5] [-n dns|url|oid|x500|namespace] [name ...]",
                    program.as_deref().unwrap_or("nsuuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };
    tracing::debug!(?opts, "parsed arguments");

    if opts.md5 {
        write_uuids(Generator::new_md5(opts.namespace), opts.names)?;
    } else {
        write_uuids(Generator::new_sha1(opts.namespace), opts.names)?;
    }
    Ok(ExitCode::SUCCESS)
}

fn write_uuids<H: NameHash>(mut g: Generator<H>, names: Vec<String>) -> io::Result<()> {
    let names: Box<dyn Iterator<Item = io::Result<String>>> = if names.is_empty() {
        Box::new(io::stdin().lock().lines())
    } else {
        Box::new(names.into_iter().map(Ok))
    };

    let mut out = io::BufWriter::new(io::stdout().lock());
    let mut uuid = Uuid::NIL;
    let mut buf = Vec::with_capacity(37);
    for name in names {
        g.generate(&mut uuid, name?);
        buf.clear();
        buf = uuid.append_formatted(buf);
        buf.push(b'\n');
        out.write_all(&buf)?;
    }
    out.flush()
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut md5 = false;
    let mut namespace = None;
    let mut names = Vec::new();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--md5" => md5 = true,
            "-n" => {
                if namespace.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                namespace.replace(parse_namespace(&n_arg)?);
            }
            "--" => names.extend(args.by_ref()),
            _ if arg.starts_with('-') => {
                return Err(format!("unrecognized argument '{}'", arg));
            }
            _ => names.push(arg),
        }
    }
    Ok(Options {
        md5,
        namespace: namespace.unwrap_or(nsuuid::NAMESPACE_DNS),
        names,
    })
}

fn parse_namespace(src: &str) -> Result<Uuid, String> {
    match src {
        "dns" => Ok(nsuuid::NAMESPACE_DNS),
        "url" => Ok(nsuuid::NAMESPACE_URL),
        "oid" => Ok(nsuuid::NAMESPACE_OID),
        "x500" => Ok(nsuuid::NAMESPACE_X500),
        _ => src
            .parse()
            .map_err(|err| format!("invalid argument to option 'n': '{}': {}", src, err)),
    }
}
