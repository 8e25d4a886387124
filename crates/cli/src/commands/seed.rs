//! Database seeding command.
//!
//! Seeds the default admin account (`admin` / `admin123`) and a set of demo
//! content. Safe to run repeatedly: the admin upserts on username and demo
//! content is only inserted into empty tables.

use sqlx::PgPool;

use ironvale_site::services::auth::hash_password;

use super::CliError;

/// Seed demo content and the default admin account.
///
/// # Errors
///
/// Returns `CliError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), CliError> {
    let pool = super::connect().await?;

    seed_admin(&pool).await?;
    seed_sections(&pool).await?;
    seed_industries(&pool).await?;
    seed_offices(&pool).await?;
    seed_brands(&pool).await?;
    seed_divisions(&pool).await?;
    seed_blog(&pool).await?;
    seed_settings(&pool).await?;

    tracing::info!("Seed complete");
    Ok(())
}

/// Default admin account, matching the documented demo credentials.
async fn seed_admin(pool: &PgPool) -> Result<(), CliError> {
    let password_hash =
        hash_password("admin123").map_err(|e| CliError::PasswordHash(e.to_string()))?;

    sqlx::query(
        "INSERT INTO admin_users (username, email, password_hash, role) \
         VALUES ('admin', 'admin@ironvalesupply.com', $1, 'admin') \
         ON CONFLICT (username) DO NOTHING",
    )
    .bind(&password_hash)
    .execute(pool)
    .await?;

    tracing::info!("Default admin ensured (admin / admin123)");
    Ok(())
}

async fn table_is_empty(pool: &PgPool, table: &str) -> Result<bool, CliError> {
    // Table names come from the fixed list below, never from user input
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT count(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

async fn seed_sections(pool: &PgPool) -> Result<(), CliError> {
    if !table_is_empty(pool, "sections").await? {
        return Ok(());
    }

    let (hero_id,): (i32,) = sqlx::query_as(
        "INSERT INTO sections (name, title, subtitle, order_index) \
         VALUES ('hero', 'Industrial Supply, Done Right', \
                 'MRO products and services for heavy industry', 0) \
         RETURNING id",
    )
    .fetch_one(pool)
    .await?;

    let (capabilities_id,): (i32,) = sqlx::query_as(
        "INSERT INTO sections (name, title, subtitle, order_index) \
         VALUES ('capabilities', 'What We Do', \
                 'From stock bearings to engineered repairs', 1) \
         RETURNING id",
    )
    .fetch_one(pool)
    .await?;

    sqlx::query(
        "INSERT INTO services (section_id, title, description, features, order_index) VALUES \
         ($1, 'Bearings & Power Transmission', \
          'Stock and specialty bearings from leading manufacturers', \
          '[\"All major brands\", \"Same-day dispatch\"]'::jsonb, 0), \
         ($1, 'Fluid Handling', \
          'Pumps, seals, and hose assemblies for process industries', \
          '[\"Custom assemblies\", \"Field service\"]'::jsonb, 1), \
         ($2, 'Gearbox Rebuilds', \
          'Full teardown, inspection, and rebuild to OEM spec', \
          '[\"OEM specs\", \"24h turnaround available\"]'::jsonb, 0)",
    )
    .bind(hero_id)
    .bind(capabilities_id)
    .execute(pool)
    .await?;

    tracing::info!("Seeded sections and services");
    Ok(())
}

async fn seed_industries(pool: &PgPool) -> Result<(), CliError> {
    if !table_is_empty(pool, "industries").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO industries (name, description, order_index) VALUES \
         ('Mining', 'Crushers, conveyors, and wash plants', 0), \
         ('Pulp & Paper', 'Wet-end rolls to winder drives', 1), \
         ('Energy', 'Generation, transmission, and renewables', 2)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded industries");
    Ok(())
}

async fn seed_offices(pool: &PgPool) -> Result<(), CliError> {
    if !table_is_empty(pool, "offices").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO offices (city, address, phone, email, is_headquarters, order_index) VALUES \
         ('Sudbury', '14 Foundry Rd', '705-555-0100', 'sudbury@ironvalesupply.com', TRUE, 0), \
         ('Thunder Bay', '220 Harbour Ave', '807-555-0188', 'tbay@ironvalesupply.com', FALSE, 1)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded offices");
    Ok(())
}

async fn seed_brands(pool: &PgPool) -> Result<(), CliError> {
    if !table_is_empty(pool, "brands").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO brands (name, website_url, order_index) VALUES \
         ('SKF', 'https://www.skf.com', 0), \
         ('Timken', 'https://www.timken.com', 1), \
         ('Gates', 'https://www.gates.com', 2)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded brands");
    Ok(())
}

async fn seed_divisions(pool: &PgPool) -> Result<(), CliError> {
    if !table_is_empty(pool, "divisions").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO divisions (name, tagline, description, order_index) VALUES \
         ('Ironvale Industrial', 'MRO supply for heavy industry', \
          'Bearings, power transmission, and fluid handling products.', 0), \
         ('Ironvale Service', 'Engineered repairs and field work', \
          'Rebuilds, alignment, and on-site maintenance crews.', 1)",
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded divisions");
    Ok(())
}

async fn seed_blog(pool: &PgPool) -> Result<(), CliError> {
    if !table_is_empty(pool, "blog_posts").await? {
        return Ok(());
    }

    sqlx::query(
        "INSERT INTO blog_posts (title, slug, excerpt, content, published, published_at) \
         VALUES ('Welcome to the new Ironvale site', 'welcome', \
                 'A fresh site for a company that has been here all along.', \
                 'We rebuilt our site from the ground up to make it easier to find \
                  products, request quotes, and reach your local branch.', \
                 TRUE, now())",
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded blog posts");
    Ok(())
}

async fn seed_settings(pool: &PgPool) -> Result<(), CliError> {
    sqlx::query(
        "UPDATE settings SET \
             tagline = COALESCE(tagline, 'Industrial MRO supply and service'), \
             contact_email = COALESCE(contact_email, 'info@ironvalesupply.com'), \
             contact_phone = COALESCE(contact_phone, '1-800-555-0199') \
         WHERE id = 1",
    )
    .execute(pool)
    .await?;

    tracing::info!("Seeded settings");
    Ok(())
}
