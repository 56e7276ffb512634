pub mod attendance_repository;
