mod helper;

mod import_id_freshness;
mod mutation_marks_pending;
mod passphrase_isolation;
mod round_trip;
