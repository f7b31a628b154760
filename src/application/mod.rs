// Model loading and inference backends
pub mod ml;

// Validation -> encoding -> inference -> report
pub mod prediction_service;

// Startup wiring
pub mod system;
