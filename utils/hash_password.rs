use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Argon2,
};
use clap::Parser;

/// Generate the argon2 hash expected in ADMIN_PASSWORD_HASH.
#[derive(Parser)]
#[command(name = "hash_password")]
struct Args {
    /// Read the password from this flag instead of prompting (useful in scripts).
    #[arg(long)]
    password: Option<String>,
}

fn main() {
    let args = Args::parse();

    let password = match args.password {
        Some(password) => password,
        None => rpassword::prompt_password("Admin password: ").expect("failed to read password"),
    };

    if password.is_empty() {
        eprintln!("Password must not be empty");
        std::process::exit(1);
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("failed to hash password");

    println!("{}", hash);
}
