mod config;

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use limber_inflector::{Inflector, Mode};
use limber_routing::RequestEnv;
use structopt::StructOpt;

use crate::config::RulesConfig;

#[derive(Debug, StructOpt)]
#[structopt(name = "limber", about = "Inflect, case-convert and slugify words.")]
struct Limber {
    /// Use Latin and Greek plurals ("formula" -> "formulae").
    #[structopt(long)]
    classical: bool,
    /// TOML file with additional inflection rules.
    #[structopt(long, parse(from_os_str))]
    rules: Option<PathBuf>,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    #[structopt(flatten)]
    Words(WordCommand),
    /// Method and path of the CGI request described by the environment.
    Request {
        /// Form parameters, as `name=value`.
        #[structopt(long = "form", parse(try_from_str = parse_form_param))]
        form: Vec<(String, String)>,
    },
}

/// Commands that transform each word on their own.
#[derive(Debug, StructOpt)]
enum WordCommand {
    /// Plural form of each word.
    Pluralize(Words),
    /// Singular form of each word.
    Singularize(Words),
    /// UpperCamelCase from underscored words.
    Camelize {
        /// Produce lowerCamelCase instead.
        #[structopt(long)]
        lower: bool,
        #[structopt(flatten)]
        words: Words,
    },
    /// underscored_words from CamelCase.
    Underscore(Words),
    /// Replace underscores with dashes.
    Dasherize(Words),
    /// Human readable form of underscored words.
    Humanize(Words),
    /// Strip the namespace from class names.
    Demodulize(Words),
    /// URL slug of each line.
    Parameterize {
        #[structopt(long, default_value = "-")]
        separator: String,
        #[structopt(flatten)]
        words: Words,
    },
    /// Replace accented letters with ASCII ones.
    Transliterate(Words),
    /// Put acute accents on vowels.
    Acute(Words),
    /// Table name for each class name.
    Tableize(Words),
    /// Class name for each table name.
    Classify(Words),
    /// Foreign key column for each class name.
    ForeignKey {
        /// Omit the underscore before "id".
        #[structopt(long)]
        no_underscore: bool,
        #[structopt(flatten)]
        words: Words,
    },
}

#[derive(Debug, StructOpt)]
struct Words {
    /// Words to transform. Read from stdin, one per line, when omitted.
    words: Vec<String>,
}

impl Words {
    fn resolve(self) -> anyhow::Result<Vec<String>> {
        if !self.words.is_empty() {
            return Ok(self.words);
        }

        io::stdin()
            .lock()
            .lines()
            .collect::<Result<_, _>>()
            .context("Reading words from stdin")
    }
}

fn main() -> anyhow::Result<()> {
    init_logger();

    let args = Limber::from_args();
    let inflector = build_inflector(args.classical, args.rules.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Request { form } => {
            let request = form
                .into_iter()
                .fold(RequestEnv::from_process_env(), |request, (name, value)| {
                    request.with_form_param(name, value)
                });

            let method = limber_routing::method(&request).context("Is this running under a CGI server?")?;

            writeln!(out, "{method} /{}", limber_routing::querystring(&request))?;
        }
        Command::Words(command) => {
            let (words, transform) = transformation(command);

            for word in words.resolve()? {
                writeln!(out, "{}", transform(&inflector, word.as_str()))?;
            }
        }
    }

    Ok(())
}

type Transform = Box<dyn Fn(&Inflector, &str) -> String>;

fn boxed(transform: impl Fn(&Inflector, &str) -> String + 'static) -> Transform {
    Box::new(transform)
}

fn transformation(command: WordCommand) -> (Words, Transform) {
    match command {
        WordCommand::Pluralize(words) => (words, boxed(|inflector, word| inflector.pluralize(word))),
        WordCommand::Singularize(words) => (words, boxed(|inflector, word| inflector.singularize(word))),
        WordCommand::Camelize { lower, words } => (words, boxed(move |_, word| limber_support::camelize(word, !lower))),
        WordCommand::Underscore(words) => (words, boxed(|_, word| limber_support::underscore(word))),
        WordCommand::Dasherize(words) => (words, boxed(|_, word| limber_support::dasherize(word))),
        WordCommand::Humanize(words) => (words, boxed(|_, word| limber_support::humanize(word))),
        WordCommand::Demodulize(words) => (words, boxed(|_, word| limber_support::demodulize(word).to_owned())),
        WordCommand::Parameterize { separator, words } => (
            words,
            boxed(move |_, word| limber_support::parameterize(word, &separator)),
        ),
        WordCommand::Transliterate(words) => (words, boxed(|_, word| limber_support::transliterate(word))),
        WordCommand::Acute(words) => (words, boxed(|_, word| limber_support::acute(word))),
        WordCommand::Tableize(words) => (words, boxed(limber_support::tableize_with)),
        WordCommand::Classify(words) => (words, boxed(limber_support::classify_with)),
        WordCommand::ForeignKey { no_underscore, words } => (
            words,
            boxed(move |_, word| limber_support::foreign_key(word, !no_underscore)),
        ),
    }
}

fn build_inflector(classical: bool, rules: Option<&std::path::Path>) -> anyhow::Result<Inflector> {
    let mode = if classical { Mode::Classical } else { Mode::Anglicized };
    let mut builder = Inflector::builder(mode);

    if let Some(path) = rules {
        builder = RulesConfig::load(path)?.register(builder);
    }

    builder.build().context("Compiling inflection rules")
}

fn parse_form_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("Expected `name=value`, got `{s}`"))
}

fn init_logger() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| eprintln!("Error initializing the global logger: {err}"))
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(command: WordCommand, inflector: &Inflector) -> Vec<String> {
        let (words, transform) = transformation(command);
        words.words.iter().map(|word| transform(inflector, word.as_str())).collect()
    }

    fn words(words: &[&str]) -> Words {
        Words {
            words: words.iter().map(|w| (*w).to_owned()).collect(),
        }
    }

    #[test]
    fn parses_subcommands() {
        let args = Limber::from_iter_safe(["limber", "--classical", "camelize", "--lower", "limber_record"]).unwrap();

        assert!(args.classical);
        assert!(matches!(
            args.command,
            Command::Words(WordCommand::Camelize { lower: true, .. })
        ));
    }

    #[test]
    fn transforms_each_word() {
        let inflector = build_inflector(false, None).unwrap();

        assert_eq!(
            run(WordCommand::Pluralize(words(&["person", "box"])), &inflector),
            ["people", "boxes"]
        );
        assert_eq!(
            run(WordCommand::Tableize(words(&["LimberRecord"])), &inflector),
            ["limber_records"]
        );
        assert_eq!(
            run(
                WordCommand::Parameterize {
                    separator: "_".to_owned(),
                    words: words(&["Ação é boa"]),
                },
                &inflector
            ),
            ["acao_e_boa"]
        );
        assert_eq!(
            run(
                WordCommand::ForeignKey {
                    no_underscore: true,
                    words: words(&["Models\\Person"]),
                },
                &inflector
            ),
            ["personid"]
        );
    }

    #[test]
    fn classical_flag_switches_modes() {
        let inflector = build_inflector(true, None).unwrap();

        assert_eq!(run(WordCommand::Pluralize(words(&["formula"])), &inflector), ["formulae"]);
    }

    #[test]
    fn request_is_not_a_word_command() {
        let args = Limber::from_iter_safe(["limber", "request", "--form", "_method=put"]).unwrap();

        match args.command {
            Command::Request { form } => assert_eq!(form, [("_method".to_owned(), "put".to_owned())]),
            Command::Words(command) => panic!("parsed as a word command: {command:?}"),
        }
    }

    #[test]
    fn form_params_need_an_equals_sign() {
        assert_eq!(
            parse_form_param("_method=put"),
            Ok(("_method".to_owned(), "put".to_owned()))
        );
        assert!(parse_form_param("_method").is_err());
    }
}
