mod draft_day;
mod upsert;
