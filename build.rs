fn main() {
    // sqlx::migrate! embeds the migration files at compile time, so the crate
    // must be rebuilt whenever one of them changes.
    println!("cargo:rerun-if-changed=migrations");
}
