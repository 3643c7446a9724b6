//! Curated recommendation bundles
//!
//! Hand-authored stacks attached to the terminal nodes of the decision tree,
//! plus the general-purpose bundle used when traversal reaches no terminal.

use crate::types::{Category, RecommendationBundle, TechRecommendation};

fn rec(primary: &[&str], reasoning: &str, alternatives: &[&str]) -> TechRecommendation {
    TechRecommendation::new(primary, reasoning, alternatives)
}

fn bundle() -> RecommendationBundle {
    RecommendationBundle::default()
}

// ============================================================================
// WEB
// ============================================================================

pub fn web_fast_simple() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "React", "Tailwind CSS"],
            "Fast, productive stack for MVPs and prototypes with built-in SSR/SSG",
            &["Astro", "Remix", "SvelteKit"],
        ))
        .with(Category::Backend, rec(
            &["Next.js API Routes", "Supabase"],
            "Integrated backend with no extra setup, ideal for rapid development",
            &["Firebase", "Vercel Postgres"],
        ))
        .with(Category::Infrastructure, rec(
            &["Vercel", "Cloudflare"],
            "Automatic deploys and a global CDN with zero configuration",
            &["Netlify", "Railway"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "VS Code", "Vercel CLI"],
            "Essential tooling for agile development",
            &["GitLab", "Cursor"],
        ))
}

pub fn web_fast_complex() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "TypeScript", "React Query"],
            "Modern type-safe stack for fast yet robust development",
            &["Remix", "SvelteKit"],
        ))
        .with(Category::Backend, rec(
            &["Next.js", "tRPC", "Prisma", "PostgreSQL"],
            "End-to-end type safety with a modern ORM for rapid development",
            &["NestJS", "Fastify"],
        ))
        .with(Category::Infrastructure, rec(
            &["Vercel", "Supabase", "Upstash"],
            "Managed services so the team can focus on features, not infrastructure",
            &["Railway", "PlanetScale"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Linear", "Sentry"],
            "Agile project management and error monitoring",
            &["GitLab", "Jira", "Rollbar"],
        ))
}

pub fn web_normal_medium() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "TypeScript", "Tailwind CSS", "Zustand"],
            "Balanced stack with state management for medium-scale applications",
            &["Remix", "Vue.js + Nuxt"],
        ))
        .with(Category::Backend, rec(
            &["Node.js", "Express", "PostgreSQL", "Prisma"],
            "Scalable backend with a type-safe ORM and a robust database",
            &["NestJS", "Fastify", "Drizzle"],
        ))
        .with(Category::Infrastructure, rec(
            &["Vercel", "Railway", "Cloudflare", "Upstash"],
            "Managed infrastructure with a good cost/performance balance",
            &["Fly.io", "Render", "DigitalOcean"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Linear", "Sentry", "GitHub Actions"],
            "Complete suite for collaboration and CI/CD",
            &["GitLab", "Notion", "CircleCI"],
        ))
}

pub fn web_long_large() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "TypeScript", "React Query", "Zustand", "Tailwind CSS"],
            "Enterprise stack with advanced state management and optimized caching",
            &["Remix", "Angular"],
        ))
        .with(Category::Backend, rec(
            &["Node.js", "NestJS", "PostgreSQL", "Redis", "GraphQL"],
            "Scalable architecture with caching, a flexible API and microservices",
            &["Go", "Java Spring Boot"],
        ))
        .with(Category::Infrastructure, rec(
            &["AWS", "Kubernetes", "Terraform", "CloudFlare"],
            "Enterprise infrastructure with auto-scaling and multi-region support",
            &["Google Cloud", "Azure"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Linear", "Datadog", "Sentry", "GitHub Actions"],
            "Enterprise tooling for observability and collaboration",
            &["GitLab", "Jira", "New Relic"],
        ))
}

// ============================================================================
// MOBILE
// ============================================================================

pub fn mobile_minimal_budget() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["React Native", "Expo"],
            "Efficient cross-platform development from a single codebase",
            &["Flutter", "Ionic"],
        ))
        .with(Category::Backend, rec(
            &["Firebase", "Supabase"],
            "Free backend-as-a-service with auth and database included",
            &["AWS Amplify", "Appwrite"],
        ))
        .with(Category::Infrastructure, rec(
            &["Firebase Hosting", "Expo EAS"],
            "Free hosting and build services for mobile apps",
            &["Vercel", "Netlify"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Expo Go", "React Native Debugger"],
            "Free tooling for mobile development",
            &["GitLab", "Flipper"],
        ))
}

pub fn mobile_high_budget() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Swift (iOS)", "Kotlin (Android)", "React Native"],
            "Native development for maximum performance with shared code where it pays off",
            &["Flutter", "Fully native"],
        ))
        .with(Category::Backend, rec(
            &["Node.js", "GraphQL", "PostgreSQL", "Redis"],
            "Robust, scalable backend for production apps",
            &["Go", "AWS AppSync"],
        ))
        .with(Category::Infrastructure, rec(
            &["AWS", "Fastly", "CloudFlare"],
            "Premium infrastructure with a global CDN and low latency",
            &["Google Cloud", "Azure"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Fastlane", "Firebase Crashlytics", "TestFlight"],
            "Complete suite for CI/CD and app distribution",
            &["GitLab", "Bitrise", "App Center"],
        ))
}

// ============================================================================
// API
// ============================================================================

pub fn api_small_scale() -> RecommendationBundle {
    bundle()
        .with(Category::Backend, rec(
            &["Node.js", "Express", "PostgreSQL"],
            "Simple, effective stack for small-scale APIs",
            &["Python + FastAPI", "Go + Gin"],
        ))
        .with(Category::Infrastructure, rec(
            &["Railway", "Render", "Supabase"],
            "Affordable hosting with a database included",
            &["Fly.io", "DigitalOcean"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Postman", "Sentry"],
            "Basic tooling for building and testing APIs",
            &["GitLab", "Insomnia", "Rollbar"],
        ))
}

pub fn api_xlarge_scale() -> RecommendationBundle {
    bundle()
        .with(Category::Backend, rec(
            &["Microservices", "Go", "Kafka", "PostgreSQL", "Redis", "gRPC"],
            "Distributed architecture for massive scale with event streaming",
            &["Java Spring Boot", "Rust", "RabbitMQ"],
        ))
        .with(Category::Infrastructure, rec(
            &["Kubernetes", "AWS", "Terraform", "Service Mesh"],
            "Container orchestration and infrastructure as code for distributed systems",
            &["Google Cloud", "Azure", "Nomad"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Datadog", "PagerDuty", "ArgoCD"],
            "Observability and continuous deployment for microservices",
            &["GitLab", "New Relic", "Spinnaker"],
        ))
}

// ============================================================================
// DESKTOP
// ============================================================================

pub fn desktop_simple() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Electron", "React", "TypeScript"],
            "Cross-platform development with familiar web technologies",
            &["Tauri", "Flutter Desktop"],
        ))
        .with(Category::Infrastructure, rec(
            &["GitHub Releases", "Electron Builder"],
            "Automated binary distribution for multiple platforms",
            &["S3 + CloudFront", "Snapcraft"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Electron Forge", "VS Code"],
            "Tooling for building and packaging desktop apps",
            &["GitLab", "electron-builder"],
        ))
}

pub fn desktop_complex() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Tauri", "Rust", "React/Vue"],
            "Native performance with a smaller footprint than Electron",
            &["Qt", "Native (C++/Swift/Kotlin)"],
        ))
        .with(Category::Infrastructure, rec(
            &["GitHub Actions", "Code Signing", "Auto-updater"],
            "Full CI/CD with code signing and automatic updates",
            &["GitLab CI", "AppCenter"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Rust Analyzer", "cargo"],
            "Complete toolchain for Rust development",
            &["GitLab", "CLion"],
        ))
}

// ============================================================================
// FULL-STACK
// ============================================================================

pub fn fullstack_solo() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "React", "Tailwind CSS"],
            "All-in-one framework that cuts down on decisions and configuration",
            &["Remix", "SvelteKit"],
        ))
        .with(Category::Backend, rec(
            &["Next.js API Routes", "Prisma", "PostgreSQL"],
            "Integrated backend with a type-safe ORM, all in one project",
            &["Supabase", "Firebase"],
        ))
        .with(Category::Infrastructure, rec(
            &["Vercel", "Supabase", "Cloudflare"],
            "One-click deploys and managed services without DevOps",
            &["Netlify", "Railway"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "VS Code", "Vercel CLI"],
            "Simple, productive tools for individual development",
            &["GitLab", "Cursor"],
        ))
}

pub fn fullstack_large_team() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "TypeScript", "Turborepo", "Tailwind CSS"],
            "Monorepo with multiple apps and shared packages",
            &["Nx", "Lerna"],
        ))
        .with(Category::Backend, rec(
            &["NestJS", "GraphQL", "PostgreSQL", "Redis", "Microservices"],
            "Modular, scalable architecture for large teams",
            &["tRPC", "Go microservices"],
        ))
        .with(Category::Infrastructure, rec(
            &["Kubernetes", "AWS", "Terraform", "ArgoCD"],
            "Enterprise infrastructure with GitOps and multiple environments",
            &["Google Cloud", "Azure", "Pulumi"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "Linear", "Datadog", "Sentry", "Figma"],
            "Enterprise suite for collaboration, monitoring and design",
            &["GitLab", "Jira", "New Relic"],
        ))
}

// ============================================================================
// FALLBACK
// ============================================================================

/// General-purpose stack returned when no terminal node is reached
pub fn default_bundle() -> RecommendationBundle {
    bundle()
        .with(Category::Frontend, rec(
            &["Next.js", "React", "TypeScript", "Tailwind CSS"],
            "Modern, versatile stack that suits most projects",
            &["Remix", "SvelteKit", "Vue.js"],
        ))
        .with(Category::Backend, rec(
            &["Node.js", "Express", "PostgreSQL"],
            "Reliable, widely adopted backend",
            &["NestJS", "Fastify", "Python + FastAPI"],
        ))
        .with(Category::Infrastructure, rec(
            &["Vercel", "Railway", "Cloudflare"],
            "Managed infrastructure with a sensible balance",
            &["Netlify", "Render", "DigitalOcean"],
        ))
        .with(Category::Tools, rec(
            &["GitHub", "VS Code", "Linear"],
            "Industry-standard tooling",
            &["GitLab", "Cursor", "Notion"],
        ))
}
