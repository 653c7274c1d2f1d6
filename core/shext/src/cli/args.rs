use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::ffi::OsString;

use super::help::{disable_command, disable_help, top_level_help, Prgname, BIN_NAME};
use crate::domain::command::Command;
use crate::domain::ExtensionUuid;

/// 解析結果: 実行するコマンドまたは補完スクリプト生成
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Command(Command),
    GenerateCompletion(Shell),
}

/// トップレベルの clap 定義
///
/// サブコマンドの引数は生の文字列のまま受け取り、サブコマンドごとの解析器に渡す。
pub(crate) fn build_clap_command() -> clap::Command {
    clap::Command::new(BIN_NAME)
        .about("Manage desktop shell extensions")
        .disable_help_flag(true)
        .disable_help_subcommand(true)
        .disable_version_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .subcommand(
            clap::Command::new("disable")
                .about("Disable an extension")
                .disable_help_flag(true)
                .arg(
                    clap::Arg::new("args")
                        .value_name("UUID")
                        .num_args(0..)
                        .trailing_var_arg(true)
                        .allow_hyphen_values(true),
                ),
        )
        .subcommand(
            clap::Command::new("help")
                .about("Print help for a command")
                .disable_help_flag(true)
                .arg(clap::Arg::new("command").value_name("COMMAND").num_args(0..)),
        )
}

/// コマンドラインを解析する（先頭はプログラム名）。
///
/// 引数不正は `Error::Usage`（終了コード 1）で返す。
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let matches = build_clap_command()
        .try_get_matches_from(&argv)
        .map_err(|e| Error::usage(clap_message(&e), top_level_help()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }
    if matches.get_flag("help") {
        return Ok(ParseOutcome::Command(Command::Help));
    }

    let command = match matches.subcommand() {
        Some(("disable", _)) => {
            let prgname = Prgname::subcommand("disable");
            let tail = subcommand_tail(&argv, "disable", &prgname)?;
            parse_disable_args(&prgname, &tail, false)?
        }
        Some(("help", m)) => parse_help_topic(&raw_values(m, "command"))?,
        Some((name, _)) => {
            return Err(Error::usage(
                format!("Unknown command '{}'", name),
                top_level_help(),
            ))
        }
        None => return Err(Error::usage("No command given", top_level_help())),
    };
    Ok(ParseOutcome::Command(command))
}

/// サブコマンド名より後ろの引数を加工せずに取り出す（`--` もそのまま残す）。
///
/// サブコマンドに到達した時点でグローバルオプションは指定されていないため、
/// プログラム名の次に現れる最初の `name` がサブコマンドである。
fn subcommand_tail(argv: &[OsString], name: &str, prgname: &Prgname) -> Result<Vec<String>, Error> {
    argv.iter()
        .skip(1)
        .skip_while(|a| a.as_os_str() != name)
        .skip(1)
        .map(|a| {
            a.clone().into_string().map_err(|a| {
                Error::usage(
                    format!("Invalid UTF-8 in argument '{}'", a.to_string_lossy()),
                    disable_help(prgname),
                )
            })
        })
        .collect()
}

fn raw_values(m: &clap::ArgMatches, id: &str) -> Vec<String> {
    m.get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// `help [command]`
fn parse_help_topic(topics: &[String]) -> Result<Command, Error> {
    match topics {
        [] => Ok(Command::Help),
        [t] if t == "help" => Ok(Command::Help),
        [t] if t == "disable" => parse_disable_args(&Prgname::subcommand("disable"), &[], true),
        [t] => Err(Error::usage(
            format!("Unknown command '{}'", t),
            top_level_help(),
        )),
        _ => Err(Error::usage("More than one command given", top_level_help())),
    }
}

/// disable の引数を解析する。`do_help` は `help disable` からの呼び出しで、解析せずにヘルプを返す
pub(crate) fn parse_disable_args(
    prgname: &Prgname,
    args: &[String],
    do_help: bool,
) -> Result<Command, Error> {
    if do_help {
        return Ok(Command::DisableHelp);
    }
    let usage = |message: &str| Error::usage(message, disable_help(prgname));

    let argv = std::iter::once(prgname.to_string()).chain(args.iter().cloned());
    let matches = disable_command(prgname)
        .try_get_matches_from(argv)
        .map_err(|e| usage(&clap_message(&e)))?;

    if matches.get_flag("help") {
        return Ok(Command::DisableHelp);
    }

    let uuids = raw_values(&matches, "uuids");
    match uuids.as_slice() {
        [] => Err(usage("No UUID given")),
        [uuid] => ExtensionUuid::new(uuid.as_str())
            .map(|uuid| Command::Disable { uuid })
            .ok_or_else(|| usage("Empty UUID given")),
        _ => Err(usage("More than one UUID given")),
    }
}

/// clap のエラー表示から 1 行目だけを取り出す（ヘルプは呼び出し側で付ける）
fn clap_message(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut std::io::stdout());
}
