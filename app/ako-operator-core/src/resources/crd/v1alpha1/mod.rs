pub mod akodeploymentconfig;
