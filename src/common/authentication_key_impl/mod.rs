mod v4_local;
