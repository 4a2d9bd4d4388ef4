mod v2_local;
mod v2_public;
mod v4_local;
mod v4_public;
