mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::process;

use cli::{disable_help, parse_args, print_completion, top_level_help, ParseOutcome, Prgname, BIN_NAME};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::command::Command;
use ports::inbound::UseCaseRunner;
use wiring::{wire_shext, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner<'a> {
    app: &'a App,
}

impl UseCaseRunner for Runner<'_> {
    fn run(&self, command: Command) -> Result<i32, Error> {
        match command {
            Command::Help => {
                println!("{}", top_level_help().trim_end());
                Ok(0)
            }
            Command::DisableHelp => {
                println!("{}", disable_help(&Prgname::subcommand("disable")).trim_end());
                Ok(0)
            }
            Command::Disable { uuid } => {
                // 既に無効でも成功（終了コード 0）
                self.app.disable_use_case.run(&uuid)?;
                Ok(0)
            }
        }
    }
}

fn main() {
    let app = wire_shext();
    process::exit(run_app(&app, std::env::args_os()));
}

/// 引数を解析してコマンドを実行し、終了コードを返す（エラーの表示もここで行う）
///
/// - 0: 成功（既に無効だった場合も含む）
/// - 1: 引数不正（メッセージとヘルプを stderr に表示）
/// - 2: 操作失敗（設定ストアを開けない・書き込み不可など）
pub(crate) fn run_app<I, T>(app: &App, args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match run(app, args) {
        Ok(code) => code,
        Err(e) => {
            report_error(&e);
            let code = e.exit_code();
            if !e.is_usage() {
                let _ = app.logger.log(
                    &LogRecord::new(LogLevel::Error, "command failed")
                        .layer("cli")
                        .kind("lifecycle")
                        .field("exit_code", code),
                );
            }
            code
        }
    }
}

fn run<I, T>(app: &App, args: I) -> Result<i32, Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let command = match parse_args(args)? {
        ParseOutcome::Command(command) => command,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    if command.is_help() {
        return Runner { app }.run(command);
    }

    let name = command.name();
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command started")
            .layer("cli")
            .kind("lifecycle")
            .field("command", name),
    );
    let code = Runner { app }.run(command)?;
    let _ = app.logger.log(
        &LogRecord::new(LogLevel::Info, "command finished")
            .layer("cli")
            .kind("lifecycle")
            .field("command", name)
            .field("exit_code", code),
    );
    Ok(code)
}

fn report_error(e: &Error) {
    match e {
        Error::Usage { message, help } => {
            eprintln!("{}", message);
            eprintln!();
            eprintln!("{}", help.trim_end());
        }
        _ => eprintln!("{}: {}", BIN_NAME, e),
    }
}
