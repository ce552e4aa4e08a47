use std::path::PathBuf;

use clap::Parser;
use studio_cms::locale::Locale;
use studio_cms::models::{Cat, CrewMember, Founder, Work};
use studio_cms::store::JsonStore;

/// One-time migration: rewrite legacy plain-string localized fields into the
/// per-locale map shape, keyed by the default locale.
#[derive(Parser)]
#[command(name = "migrate_content")]
struct Args {
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
    /// Locale legacy plain strings are assumed to be written in.
    #[arg(long, default_value = "tr")]
    default_locale: Locale,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    let store = JsonStore::new(args.data_dir);
    let locale = args.default_locale;

    migrate::<Work>(&store, Work::FILE, locale, |work| work.normalize(locale)).await;
    migrate::<CrewMember>(&store, CrewMember::FILE, locale, |member| {
        member.normalize(locale)
    })
    .await;
    migrate::<Founder>(&store, Founder::FILE, locale, |founder| {
        founder.normalize(locale)
    })
    .await;
    migrate::<Cat>(&store, Cat::FILE, locale, |cat| cat.normalize(locale)).await;
}

async fn migrate<T>(store: &JsonStore, file: &str, locale: Locale, normalize: impl Fn(&mut T))
where
    T: serde::de::DeserializeOwned + serde::Serialize,
{
    let mut items: Vec<T> = match store.load(file).await {
        Ok(items) => items,
        Err(e) => {
            eprintln!("{}: skipped ({:?})", file, e);
            return;
        }
    };

    if items.is_empty() {
        println!("{}: nothing to migrate", file);
        return;
    }

    for item in &mut items {
        normalize(item);
    }

    match store.save(file, &items).await {
        Ok(()) => println!(
            "{}: normalized {} records to '{}' locale maps",
            file,
            items.len(),
            locale.as_str()
        ),
        Err(e) => eprintln!("{}: failed to write ({:?})", file, e),
    }
}
