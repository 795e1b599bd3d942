//! Page fetching for the quotation site.
//!
//! There is a single source, [`philo`], scraped through its mobile rendering
//! because the markup there is minimal and consistent. Pages are addressed by
//! a bare numeric index appended to a URL template; the site gives no listing
//! of which indexes exist, so the caller walks a range and treats HTTP errors
//! as "no such page".

pub mod philo;
