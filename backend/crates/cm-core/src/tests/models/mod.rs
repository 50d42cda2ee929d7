mod profile_update;
mod role;
mod user_record;
