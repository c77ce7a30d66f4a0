pub mod write_commit;
