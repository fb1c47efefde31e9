use banking_common::cli::constants::*;
use banking_common::cli::helpers::{parse_amount, parse_choice, Console};
use banking_common::{AccountType, AmountPolicy, BankConfig, BankingApplication, BankingError};
use std::io::{self, BufRead, Write};

/// Default `RUST_LOG` filter: failures are already reported on the console.
pub const DEFAULT_LOG_FILTER: &str = "banking=error";

/// A choice that matches no menu option
const NO_CHOICE: i64 = -1;

/// What the loop should do after an action
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Exit,
}

/// **Runs the menu until the user exits or the input ends.**
///
/// Every action's outcome, success or failure, is written to the console,
/// and the menu is shown again. Only I/O errors end the loop early.
///
/// Non-numeric input is reported, and then treated as an unknown option.
pub fn main_loop<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        console.menu()?;
        let line = match console.prompt(PROMPT)? {
            Some(line) => line,
            None => break,
        };

        let choice = match parse_choice(&line) {
            Ok(choice) => choice,
            Err(err) => {
                log::debug!("menu; {:?}", err);
                console.say(INVALID_CHOICE_MSG)?;
                NO_CHOICE
            }
        };

        if dispatch(choice, app, console)? == Flow::Exit {
            break;
        }
    }

    log::info!("main_loop; exiting");
    console.say(GOODBYE_MSG)
}

fn dispatch<R: BufRead, W: Write>(
    choice: i64,
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    match choice {
        REGISTER => register(app, console),
        LOGIN => login(app, console),
        OPEN_ACCOUNT => open_account(app, console),
        DEPOSIT => deposit(app, console),
        WITHDRAW => withdraw(app, console),
        CHECK_BALANCE => check_balance(app, console),
        GENERATE_STATEMENT => generate_statement(app, console),
        ADD_MONTHLY_INTEREST => add_monthly_interest(app, console),
        LOGOUT => {
            app.logout();
            console.say(LOGGED_OUT_MSG)?;
            Ok(Flow::Continue)
        }
        EXIT => Ok(Flow::Exit),
        _ => {
            console.say(INVALID_OPTION_MSG)?;
            Ok(Flow::Continue)
        }
    }
}

/// **Picks the configuration**
///
/// An amount policy named on the command line takes precedence over the environment.
/// An unknown policy name is reported, and the environment's choice is kept.
pub fn get_config(policy_arg: Option<String>) -> BankConfig {
    let mut config = BankConfig::from_env();

    if let Some(arg) = policy_arg {
        match arg.parse::<AmountPolicy>() {
            Ok(policy) => config.amount_policy = policy,
            Err(msg) => {
                eprintln!(
                    "[ERROR] {}; using the {} amount policy.",
                    msg, config.amount_policy
                );
            }
        }
    }

    config
}

/// Asks for the fields of an action in turn.
///
/// `None` means the input ended halfway through.
macro_rules! ask {
    ($console:expr, $label:expr) => {
        match $console.prompt($label)? {
            Some(answer) => answer,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Asks for a number; a parse failure aborts the action.
macro_rules! ask_amount {
    ($console:expr, $label:expr) => {
        match parse_amount(&ask!($console, $label)) {
            Ok(amount) => amount,
            Err(err) => {
                report($console, &err)?;
                return Ok(Flow::Continue);
            }
        }
    };
}

/// Prints a failure, and carries on.
fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    err: &BankingError,
) -> io::Result<()> {
    log::debug!("{:?}", err);
    console.say(err)
}

/// Checks the login before asking for anything.
fn logged_in<R: BufRead, W: Write>(
    app: &BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<bool> {
    match app.require_login() {
        Ok(()) => Ok(true),
        Err(err) => {
            report(console, &err)?;
            Ok(false)
        }
    }
}

/// Asks for an account number, and checks that the account exists.
///
/// `Ok(None)` means the action should stop: the account is missing or the input ended.
fn ask_account_number<R: BufRead, W: Write>(
    app: &BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Option<String>> {
    let number = match console.prompt(ACCOUNT_NUMBER_PROMPT)? {
        Some(number) => number.trim().to_string(),
        None => return Ok(None),
    };

    match app.get_account(&number) {
        Ok(_) => Ok(Some(number)),
        Err(err) => {
            report(console, &err)?;
            Ok(None)
        }
    }
}

fn register<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let username = ask!(console, USERNAME_PROMPT);
    let password = ask!(console, PASSWORD_PROMPT);

    match app.register(&username, &password) {
        Ok(()) => console.say(REGISTERED_MSG)?,
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn login<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let username = ask!(console, USERNAME_PROMPT);
    let password = ask!(console, PASSWORD_PROMPT);

    match app.login(&username, &password) {
        Ok(()) => console.say(LOGGED_IN_MSG)?,
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn open_account<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if !logged_in(app, console)? {
        return Ok(Flow::Continue);
    }

    let holder_name = ask!(console, HOLDER_NAME_PROMPT);
    let account_type = match ask!(console, ACCOUNT_TYPE_PROMPT).parse::<AccountType>() {
        Ok(account_type) => account_type,
        Err(never) => match never {},
    };
    let initial_deposit = ask_amount!(console, INITIAL_DEPOSIT_PROMPT);

    match app.open_account(&holder_name, account_type, initial_deposit) {
        Ok(number) => console.say(format!("Account created. Account number: {}", number))?,
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn deposit<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if !logged_in(app, console)? {
        return Ok(Flow::Continue);
    }
    let Some(number) = ask_account_number(app, console)? else {
        return Ok(Flow::Continue);
    };
    let amount = ask_amount!(console, DEPOSIT_AMOUNT_PROMPT);

    match app.deposit(&number, amount) {
        Ok(_) => {
            let balance = app.check_balance(&number).unwrap_or_default();
            console.say(format!("Deposit successful. New balance: {}", balance))?
        }
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn withdraw<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if !logged_in(app, console)? {
        return Ok(Flow::Continue);
    }
    let Some(number) = ask_account_number(app, console)? else {
        return Ok(Flow::Continue);
    };
    let amount = ask_amount!(console, WITHDRAWAL_AMOUNT_PROMPT);

    match app.withdraw(&number, amount) {
        Ok(_) => {
            let balance = app.check_balance(&number).unwrap_or_default();
            console.say(format!("Withdrawal successful. New balance: {}", balance))?
        }
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn check_balance<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if !logged_in(app, console)? {
        return Ok(Flow::Continue);
    }
    let Some(number) = ask_account_number(app, console)? else {
        return Ok(Flow::Continue);
    };

    match app.check_balance(&number) {
        Ok(balance) => console.say(format!("Your current balance is: {}", balance))?,
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

fn generate_statement<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if !logged_in(app, console)? {
        return Ok(Flow::Continue);
    }
    let Some(number) = ask_account_number(app, console)? else {
        return Ok(Flow::Continue);
    };

    match app.generate_statement(&number) {
        Ok(statement) => console.say(statement)?,
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}

/// Non-Savings accounts are turned away before the rate is asked for.
fn add_monthly_interest<R: BufRead, W: Write>(
    app: &mut BankingApplication,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if !logged_in(app, console)? {
        return Ok(Flow::Continue);
    }
    let Some(number) = ask_account_number(app, console)? else {
        return Ok(Flow::Continue);
    };

    let is_savings = app
        .get_account(&number)
        .map(|a| *a.account_type() == AccountType::Savings)
        .unwrap_or(false);
    if !is_savings {
        report(
            console,
            &BankingError::UnsupportedAccountTypeForInterest(number),
        )?;
        return Ok(Flow::Continue);
    }

    let rate = ask_amount!(console, INTEREST_RATE_PROMPT);

    match app.add_monthly_interest(&number, rate) {
        Ok(tx) => {
            let balance = app.check_balance(&number).unwrap_or_default();
            console.say(format!(
                "Interest added: {}. New balance: {}",
                tx.amount(),
                balance
            ))?
        }
        Err(err) => report(console, &err)?,
    }
    Ok(Flow::Continue)
}
