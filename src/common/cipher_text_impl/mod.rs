mod v2_local;
mod v4_local;
