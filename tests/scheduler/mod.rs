mod backfill;
mod retention;
