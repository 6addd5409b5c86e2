use std::error::Error;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::{Date, macros::date};

use wedding_expenses::{
    Amount, DEFAULT_MEMBERS, EVENTS, Expense, ExpenseStore, SQLiteExpenseStore, StoreFilter,
    create_member, delete_all_members, initialize_db, summarize,
};

/// A utility for filling a database with sample wedding expenses.
///
/// Every existing expense and member in the database is replaced.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the SQLite database, created if it does not exist.
    #[arg(long)]
    db_path: String,
}

/// (title, amount, event, paid by, date, notes)
type SampleExpense = (&'static str, i64, &'static str, &'static str, Date, &'static str);

const SAMPLE_EXPENSES: [SampleExpense; 33] = [
    (
        "Engagement Ring",
        75_000,
        "Chheka",
        "Ramesh (Father)",
        date!(2026 - 02 - 15),
        "Diamond ring from jewelry store",
    ),
    (
        "Venue Booking",
        25_000,
        "Chheka",
        "Suresh (Uncle)",
        date!(2026 - 02 - 10),
        "Garden venue for engagement",
    ),
    (
        "Photographer",
        15_000,
        "Chheka",
        "Rahul (Brother)",
        date!(2026 - 02 - 15),
        "Professional photography",
    ),
    (
        "Decoration",
        12_000,
        "Chheka",
        "Priya (Aunt)",
        date!(2026 - 02 - 15),
        "Floral and lighting",
    ),
    (
        "Mehendi Artist",
        18_000,
        "Mehendi",
        "Sunita (Mother)",
        date!(2026 - 02 - 18),
        "Bridal mehendi specialist",
    ),
    (
        "Venue Decoration",
        22_000,
        "Mehendi",
        "Ramesh (Father)",
        date!(2026 - 02 - 18),
        "Floral decoration and marigolds",
    ),
    (
        "Catering for 100 guests",
        35_000,
        "Mehendi",
        "Suresh (Uncle)",
        date!(2026 - 02 - 18),
        "Snacks and beverages",
    ),
    (
        "DJ and Music",
        20_000,
        "Mehendi",
        "Rahul (Brother)",
        date!(2026 - 02 - 18),
        "Wedding DJ with sound system",
    ),
    (
        "Invitation Cards",
        8_000,
        "Mehendi",
        "Priya (Aunt)",
        date!(2026 - 02 - 12),
        "Printed invitations",
    ),
    (
        "Haldi Ceremony Setup",
        15_000,
        "Haldi",
        "Sunita (Mother)",
        date!(2026 - 02 - 19),
        "Yellow flowers and drapes",
    ),
    (
        "Traditional Outfits",
        30_000,
        "Haldi",
        "Ramesh (Father)",
        date!(2026 - 02 - 17),
        "Yellow kurtas for family",
    ),
    (
        "Photography & Videography",
        18_000,
        "Haldi",
        "Rahul (Brother)",
        date!(2026 - 02 - 19),
        "Candid shots",
    ),
    (
        "Catering",
        28_000,
        "Haldi",
        "Suresh (Uncle)",
        date!(2026 - 02 - 19),
        "Lunch for 80 guests",
    ),
    (
        "Wedding Venue",
        120_000,
        "Wedding",
        "Ramesh (Father)",
        date!(2026 - 02 - 20),
        "Premium banquet hall",
    ),
    (
        "Catering - 500 guests",
        180_000,
        "Wedding",
        "Ramesh (Father)",
        date!(2026 - 02 - 20),
        "Full course dinner",
    ),
    (
        "Bridal Lehenga & Jewelry",
        150_000,
        "Wedding",
        "Sunita (Mother)",
        date!(2026 - 02 - 18),
        "Designer bridal outfit",
    ),
    (
        "Groom Sherwani",
        45_000,
        "Wedding",
        "Ramesh (Father)",
        date!(2026 - 02 - 18),
        "Designer sherwani set",
    ),
    (
        "Photography Package",
        65_000,
        "Wedding",
        "Rahul (Brother)",
        date!(2026 - 02 - 20),
        "Photo + video coverage",
    ),
    (
        "Wedding Decoration",
        85_000,
        "Wedding",
        "Suresh (Uncle)",
        date!(2026 - 02 - 20),
        "Stage, mandap, flowers",
    ),
    (
        "Live Band",
        50_000,
        "Wedding",
        "Priya (Aunt)",
        date!(2026 - 02 - 20),
        "Professional wedding band",
    ),
    (
        "Makeup Artist",
        25_000,
        "Wedding",
        "Sunita (Mother)",
        date!(2026 - 02 - 20),
        "Bridal makeup and hair",
    ),
    (
        "Transport - Guest Cars",
        40_000,
        "Wedding",
        "Suresh (Uncle)",
        date!(2026 - 02 - 20),
        "Car rentals for family",
    ),
    (
        "Pandit Dakshina",
        11_000,
        "Wedding",
        "Ramesh (Father)",
        date!(2026 - 02 - 20),
        "Wedding rituals",
    ),
    (
        "Wedding Gifts",
        35_000,
        "Wedding",
        "Priya (Aunt)",
        date!(2026 - 02 - 19),
        "Return gifts for guests",
    ),
    (
        "Reception Venue",
        95_000,
        "Reception",
        "Ramesh (Father)",
        date!(2026 - 02 - 21),
        "Hotel ballroom",
    ),
    (
        "Catering - 400 guests",
        140_000,
        "Reception",
        "Ramesh (Father)",
        date!(2026 - 02 - 21),
        "Buffet dinner",
    ),
    (
        "Reception Decoration",
        55_000,
        "Reception",
        "Suresh (Uncle)",
        date!(2026 - 02 - 21),
        "Elegant theme decor",
    ),
    (
        "DJ & Entertainment",
        35_000,
        "Reception",
        "Rahul (Brother)",
        date!(2026 - 02 - 21),
        "DJ for reception party",
    ),
    (
        "Reception Photography",
        30_000,
        "Reception",
        "Priya (Aunt)",
        date!(2026 - 02 - 21),
        "Evening photography",
    ),
    (
        "Bride Reception Dress",
        40_000,
        "Reception",
        "Sunita (Mother)",
        date!(2026 - 02 - 19),
        "Designer gown",
    ),
    (
        "Wedding Cards Printing",
        15_000,
        "Wedding",
        "Ramesh (Father)",
        date!(2026 - 02 - 05),
        "500 premium cards",
    ),
    (
        "Priest Accommodation",
        5_000,
        "Wedding",
        "Sunita (Mother)",
        date!(2026 - 02 - 19),
        "Hotel stay",
    ),
    (
        "Emergency Supplies",
        8_000,
        "Wedding",
        "Rahul (Brother)",
        date!(2026 - 02 - 20),
        "First aid, extras",
    ),
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().init();

    let args = Args::parse();

    tracing::info!("Opening database at {}", args.db_path);
    let connection = Connection::open(&args.db_path)?;
    initialize_db(&connection)?;

    let connection = Arc::new(Mutex::new(connection));
    let store = SQLiteExpenseStore::new(connection.clone());

    let deleted = store.clear()?;
    tracing::info!("Cleared {deleted} existing expenses");

    for (title, amount, event, paid_by, date, notes) in SAMPLE_EXPENSES {
        store.create(
            Expense::build(title, Amount::from_major_units(amount), event, paid_by, date)
                .notes(notes),
        )?;
    }
    tracing::info!("Inserted {} expenses", SAMPLE_EXPENSES.len());

    {
        let connection = connection
            .lock()
            .map_err(|error| format!("could not acquire database lock: {error}"))?;

        delete_all_members(&connection)?;
        for name in DEFAULT_MEMBERS {
            create_member(name, "", &connection)?;
        }
    }
    tracing::info!("Inserted {} members", DEFAULT_MEMBERS.len());

    let summary = summarize(&store.fetch_all(&StoreFilter::default())?);

    for event in EVENTS {
        let (total, count) = summary
            .by_event
            .iter()
            .find(|group| group.event == event.name)
            .map_or((Amount::ZERO, 0), |group| (group.total, group.count));

        tracing::info!("{} {}: {count} expenses, ₹{total}", event.emoji, event.name);
    }

    tracing::info!("Grand total: ₹{}", summary.total_amount);

    Ok(())
}
