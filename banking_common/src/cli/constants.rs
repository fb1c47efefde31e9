/// Menu options, in the order they are listed

pub const REGISTER: i64 = 1;
pub const LOGIN: i64 = 2;
pub const OPEN_ACCOUNT: i64 = 3;
pub const DEPOSIT: i64 = 4;
pub const WITHDRAW: i64 = 5;
pub const CHECK_BALANCE: i64 = 6;
pub const GENERATE_STATEMENT: i64 = 7;
pub const ADD_MONTHLY_INTEREST: i64 = 8;
pub const LOGOUT: i64 = 9;
pub const EXIT: i64 = 10;

pub const MENU_ITEMS: [(i64, &str); 10] = [
    (REGISTER, "Register"),
    (LOGIN, "Login"),
    (OPEN_ACCOUNT, "Open Account"),
    (DEPOSIT, "Deposit"),
    (WITHDRAW, "Withdraw"),
    (CHECK_BALANCE, "Check Balance"),
    (GENERATE_STATEMENT, "Generate Statement"),
    (ADD_MONTHLY_INTEREST, "Add Monthly Interest"),
    (LOGOUT, "Logout"),
    (EXIT, "Exit"),
];

/// Prompts

pub const PROMPT: &str = "Select an option: ";
pub const USERNAME_PROMPT: &str = "Enter username: ";
pub const PASSWORD_PROMPT: &str = "Enter password: ";
pub const HOLDER_NAME_PROMPT: &str = "Enter account holder name: ";
pub const ACCOUNT_TYPE_PROMPT: &str = "Enter account type (Savings/Checking): ";
pub const INITIAL_DEPOSIT_PROMPT: &str = "Enter initial deposit: ";
pub const ACCOUNT_NUMBER_PROMPT: &str = "Enter account number: ";
pub const DEPOSIT_AMOUNT_PROMPT: &str = "Enter deposit amount: ";
pub const WITHDRAWAL_AMOUNT_PROMPT: &str = "Enter withdrawal amount: ";
pub const INTEREST_RATE_PROMPT: &str = "Enter interest rate: ";

/// Messages

pub const INVALID_CHOICE_MSG: &str = "Invalid input. Please enter a valid number.";
pub const INVALID_OPTION_MSG: &str = "Invalid option.";
pub const REGISTERED_MSG: &str = "Registration successful.";
pub const LOGGED_IN_MSG: &str = "Login successful.";
pub const LOGGED_OUT_MSG: &str = "You have been logged out.";
pub const GOODBYE_MSG: &str = "Goodbye.";
