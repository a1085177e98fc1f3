//! Fixed profiles for the analyzers that have no rules.

use super::{Guide, Template};
use crate::models::Classification;

/// Everything a [`super::StubAnalyzer`] reports about its domain.
pub struct StubProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub group: &'static str,
    pub classification: (fn(String) -> Classification, &'static str),
    pub specializations: &'static [&'static str],
    pub best_practices: &'static [&'static str],
    pub template: Template,
    /// Answers the `best-practices` topic.
    pub guide: Guide,
    pub optimizations: &'static [&'static str],
}

/// All stub profiles, in catalog order.
pub fn stub_profiles() -> &'static [StubProfile] {
    PROFILES
}

const fn guide(title: &'static str, content: &'static str) -> Guide {
    Guide {
        topic: "best-practices",
        title,
        content,
    }
}

static PROFILES: &[StubProfile] = &[
    // languages
    StubProfile {
        id: "python",
        name: "Python Master",
        group: "languages",
        classification: (Classification::Language, "python"),
        specializations: &[
            "Python 3.11+",
            "Type Hints",
            "FastAPI",
            "Django",
            "Pytest",
            "Async/Await",
            "PEP 8",
            "Poetry",
        ],
        best_practices: &[
            "Always use type hints for function signatures",
            "Follow PEP 8 style guide",
            "Use async/await for I/O operations",
            "Write comprehensive tests with pytest",
            "Use FastAPI for modern APIs",
        ],
        template: Template {
            id: "fastapi",
            files: &[
                (
                    "main.py",
                    r#""""{{name}} API."""
from fastapi import FastAPI

app = FastAPI(title="{{name}}")


@app.get("/health")
async def health() -> dict[str, str]:
    return {"status": "ok"}
"#,
                ),
                ("requirements.txt", "fastapi>=0.104.0\nuvicorn>=0.24.0\npytest>=7.4.0\n"),
                (
                    "tests/test_main.py",
                    r#"from fastapi.testclient import TestClient

from main import app

client = TestClient(app)


def test_health() -> None:
    assert client.get("/health").json() == {"status": "ok"}
"#,
                ),
            ],
        },
        guide: guide(
            "Python Best Practices",
            "Use type hints, follow PEP 8, test with pytest",
        ),
        optimizations: &[
            "Use f-strings for string formatting",
            "Use context managers (with statement) for file operations",
        ],
    },
    StubProfile {
        id: "typescript",
        name: "TypeScript Master",
        group: "languages",
        classification: (Classification::Language, "typescript"),
        specializations: &[
            "TypeScript 5.x",
            "Strict Mode",
            "Type Safety",
            "Type Inference",
            "Generics & Utility Types",
            "NestJS",
            "Decorators",
        ],
        best_practices: &[
            "Enable strict mode in tsconfig.json",
            "Avoid using any type",
            "Prefer unknown over any",
            "Use utility types (Partial, Pick, Omit)",
            "Define return types explicitly",
        ],
        template: Template {
            id: "nestjs",
            files: &[
                (
                    "src/main.ts",
                    r#"import { NestFactory } from '@nestjs/core';
import { AppModule } from './app.module';

async function bootstrap(): Promise<void> {
  const app = await NestFactory.create(AppModule);
  await app.listen(3000);
}

bootstrap();
"#,
                ),
                (
                    "src/app.module.ts",
                    r#"import { Module } from '@nestjs/common';

@Module({})
export class AppModule {}
"#,
                ),
                (
                    "tsconfig.json",
                    r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "commonjs",
    "strict": true,
    "experimentalDecorators": true,
    "emitDecoratorMetadata": true,
    "outDir": "./dist"
  }
}
"#,
                ),
                (
                    "package.json",
                    r#"{
  "name": "{{name}}",
  "version": "1.0.0",
  "dependencies": {
    "@nestjs/common": "^10.0.0",
    "@nestjs/core": "^10.0.0",
    "@nestjs/platform-express": "^10.0.0"
  }
}
"#,
                ),
            ],
        },
        guide: guide(
            "TypeScript Best Practices",
            "Enable strict mode, avoid any, leverage inference",
        ),
        optimizations: &[
            "Replace \"any\" with more specific types or \"unknown\"",
            "Consider using utility types (Partial, Pick, Omit)",
        ],
    },
    StubProfile {
        id: "java",
        name: "Java Master",
        group: "languages",
        classification: (Classification::Language, "java"),
        specializations: &[
            "Java 17+ LTS",
            "Spring Boot 3.x",
            "Maven & Gradle",
            "JUnit 5",
            "Records & Pattern Matching",
        ],
        best_practices: &[
            "Use Java 17+ features (Records, Sealed Classes)",
            "Follow SOLID principles",
            "Implement proper exception handling",
            "Write tests with JUnit 5",
        ],
        template: Template {
            id: "spring-boot",
            files: &[
                (
                    "pom.xml",
                    r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>com.example</groupId>
  <artifactId>{{name}}</artifactId>
  <version>1.0.0</version>
  <parent>
    <groupId>org.springframework.boot</groupId>
    <artifactId>spring-boot-starter-parent</artifactId>
    <version>3.2.0</version>
  </parent>
</project>
"#,
                ),
                (
                    "src/main/java/Application.java",
                    r#"package com.example;

import org.springframework.boot.SpringApplication;
import org.springframework.boot.autoconfigure.SpringBootApplication;

@SpringBootApplication
public class Application {
    public static void main(String[] args) {
        SpringApplication.run(Application.class, args);
    }
}
"#,
                ),
            ],
        },
        guide: guide(
            "Java Best Practices",
            "Use modern Java features, Spring Boot, and proper testing",
        ),
        optimizations: &["Use records for DTOs", "Use streams for collections"],
    },
    StubProfile {
        id: "go",
        name: "Go Master",
        group: "languages",
        classification: (Classification::Language, "go"),
        specializations: &[
            "Go 1.21+",
            "Goroutines & Channels",
            "Microservices",
            "Go Modules",
            "Context & Cancellation",
            "Error Handling",
        ],
        best_practices: &[
            "Handle errors explicitly",
            "Use context for cancellation",
            "Use defer for cleanup",
            "Use interfaces for abstraction",
        ],
        template: Template {
            id: "service",
            files: &[
                (
                    "main.go",
                    r#"package main

import (
	"fmt"
	"net/http"
)

func main() {
	http.HandleFunc("/health", func(w http.ResponseWriter, r *http.Request) {
		fmt.Fprintln(w, "ok")
	})
	http.ListenAndServe(":8080", nil)
}
"#,
                ),
                ("go.mod", "module {{name}}\n\ngo 1.21\n"),
            ],
        },
        guide: guide(
            "Go Best Practices",
            "Write simple, idiomatic Go code with proper error handling",
        ),
        optimizations: &["Use sync.Pool for object reuse", "Optimize goroutine usage"],
    },
    StubProfile {
        id: "rust",
        name: "Rust Master",
        group: "languages",
        classification: (Classification::Language, "rust"),
        specializations: &[
            "Rust 1.70+",
            "Ownership & Borrowing",
            "Cargo & Crates",
            "Error Handling (Result, Option)",
            "Traits & Generics",
            "Async/Await",
        ],
        best_practices: &[
            "Leverage ownership system",
            "Use Result for error handling",
            "Prefer borrowing over cloning",
            "Avoid unsafe unless necessary",
        ],
        template: Template {
            id: "binary",
            files: &[
                (
                    "src/main.rs",
                    "fn main() {\n    println!(\"Hello from {{name}}\");\n}\n",
                ),
                (
                    "Cargo.toml",
                    "[package]\nname = \"{{name}}\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[dependencies]\n",
                ),
            ],
        },
        guide: guide(
            "Rust Best Practices",
            "Leverage ownership, write safe code, use Result for errors",
        ),
        optimizations: &[
            "Use references to avoid cloning",
            "Leverage zero-cost abstractions",
        ],
    },
    StubProfile {
        id: "php",
        name: "PHP Master",
        group: "languages",
        classification: (Classification::Language, "php"),
        specializations: &[
            "PHP 8.2+",
            "Laravel 10.x",
            "Composer",
            "PSR Standards",
            "PHPUnit Testing",
        ],
        best_practices: &[
            "Follow PSR-12 coding standards",
            "Use type declarations",
            "Use strict types",
            "Use Composer for dependencies",
        ],
        template: Template {
            id: "app",
            files: &[
                (
                    "index.php",
                    "<?php\n\ndeclare(strict_types=1);\n\nrequire __DIR__ . '/vendor/autoload.php';\n\necho 'Hello from {{name}}';\n",
                ),
                (
                    "composer.json",
                    r#"{
  "name": "app/{{name}}",
  "require": {
    "php": "^8.2"
  },
  "autoload": {
    "psr-4": { "App\\": "src/" }
  }
}
"#,
                ),
            ],
        },
        guide: guide(
            "PHP Best Practices",
            "Use modern PHP 8+, follow PSR standards, use type declarations",
        ),
        optimizations: &["Use opcache", "Optimize database queries"],
    },
    // frontend
    StubProfile {
        id: "vue",
        name: "Vue Master",
        group: "frontend",
        classification: (Classification::Framework, "vue"),
        specializations: &["Vue 3", "Composition API", "Nuxt 3", "Pinia", "TypeScript", "Vite"],
        best_practices: &[
            "Use Composition API over Options API",
            "Leverage Pinia for state management",
            "Use TypeScript for type safety",
        ],
        template: Template {
            id: "app",
            files: &[(
                "App.vue",
                r#"<template>
  <h1>{{ title }}</h1>
  <button @click="count++">Count: {{ count }}</button>
</template>

<script setup lang="ts">
import { ref } from 'vue';

const title = '{{name}}';
const count = ref(0);
</script>
"#,
            )],
        },
        guide: guide("Vue Best Practices", "Use Composition API and Pinia"),
        optimizations: &["Use v-memo for optimization"],
    },
    StubProfile {
        id: "angular",
        name: "Angular Master",
        group: "frontend",
        classification: (Classification::Framework, "angular"),
        specializations: &[
            "Angular 17+",
            "TypeScript",
            "RxJS",
            "NGRX",
            "Signals",
            "Standalone Components",
        ],
        best_practices: &[
            "Use standalone components",
            "Leverage Angular signals",
            "Implement OnPush change detection",
        ],
        template: Template {
            id: "component",
            files: &[(
                "app.component.ts",
                r#"import { Component, signal } from '@angular/core';

@Component({
  selector: 'app-root',
  standalone: true,
  template: `<h1>{{ title }}</h1>`,
})
export class AppComponent {
  title = signal('{{name}}');
}
"#,
            )],
        },
        guide: guide(
            "Angular Best Practices",
            "Use signals and standalone components",
        ),
        optimizations: &["Use OnPush strategy"],
    },
    // mobile
    StubProfile {
        id: "flutter",
        name: "Flutter Master",
        group: "mobile",
        classification: (Classification::Platform, "flutter"),
        specializations: &[
            "Flutter 3.x",
            "Dart",
            "Widget Composition",
            "Riverpod",
            "BLoC",
            "Material Design",
        ],
        best_practices: &[
            "Use widget composition",
            "Implement Riverpod for state management",
            "Write widget tests",
        ],
        template: Template {
            id: "app",
            files: &[(
                "main.dart",
                r#"import 'package:flutter/material.dart';

void main() => runApp(const App());

class App extends StatelessWidget {
  const App({super.key});

  @override
  Widget build(BuildContext context) {
    return const MaterialApp(
      home: Scaffold(body: Center(child: Text('{{name}}'))),
    );
  }
}
"#,
            )],
        },
        guide: guide(
            "Flutter Best Practices",
            "Use widget composition and Riverpod",
        ),
        optimizations: &["Use const constructors"],
    },
    StubProfile {
        id: "react-native",
        name: "React Native Master",
        group: "mobile",
        classification: (Classification::Platform, "react-native"),
        specializations: &[
            "React Native 0.73+",
            "Expo",
            "React Navigation",
            "Native Modules",
            "Performance",
        ],
        best_practices: &[
            "Use Expo for faster development",
            "Implement React Navigation",
            "Optimize performance with FlatList",
        ],
        template: Template {
            id: "app",
            files: &[(
                "App.tsx",
                r#"import React from 'react';
import { SafeAreaView, Text } from 'react-native';

export default function App() {
  return (
    <SafeAreaView>
      <Text>{{name}}</Text>
    </SafeAreaView>
  );
}
"#,
            )],
        },
        guide: guide(
            "React Native Best Practices",
            "Use Expo and optimize performance",
        ),
        optimizations: &["Use FlatList for long lists"],
    },
    StubProfile {
        id: "ios",
        name: "iOS Master",
        group: "mobile",
        classification: (Classification::Platform, "ios"),
        specializations: &[
            "Swift 5.9+",
            "SwiftUI",
            "Combine",
            "UIKit",
            "Core Data",
            "App Store Guidelines",
        ],
        best_practices: &[
            "Use SwiftUI for modern apps",
            "Follow Apple HIG",
            "Implement proper memory management",
        ],
        template: Template {
            id: "swiftui",
            files: &[(
                "ContentView.swift",
                r#"import SwiftUI

struct ContentView: View {
    var body: some View {
        Text("{{name}}")
            .padding()
    }
}
"#,
            )],
        },
        guide: guide("iOS Best Practices", "Use SwiftUI and follow Apple HIG"),
        optimizations: &["Use lazy loading"],
    },
    StubProfile {
        id: "android",
        name: "Android Master",
        group: "mobile",
        classification: (Classification::Platform, "android"),
        specializations: &[
            "Kotlin",
            "Jetpack Compose",
            "Material Design 3",
            "Room",
            "Coroutines",
            "MVVM",
        ],
        best_practices: &[
            "Use Jetpack Compose for UI",
            "Implement MVVM architecture",
            "Use Kotlin coroutines",
        ],
        template: Template {
            id: "compose",
            files: &[(
                "MainActivity.kt",
                r#"package com.example.app

import android.os.Bundle
import androidx.activity.ComponentActivity
import androidx.activity.compose.setContent
import androidx.compose.material3.Text

class MainActivity : ComponentActivity() {
    override fun onCreate(savedInstanceState: Bundle?) {
        super.onCreate(savedInstanceState)
        setContent { Text("{{name}}") }
    }
}
"#,
            )],
        },
        guide: guide("Android Best Practices", "Use Jetpack Compose and Kotlin"),
        optimizations: &["Use remember for state"],
    },
    // devops
    StubProfile {
        id: "docker",
        name: "Docker Master",
        group: "devops",
        classification: (Classification::Category, "devops"),
        specializations: &[
            "Docker",
            "Multi-stage Builds",
            "Docker Compose",
            "Security",
            "Best Practices",
        ],
        best_practices: &[
            "Use multi-stage builds",
            "Minimize image layers",
            "Use Alpine or slim base images",
            "Implement health checks",
            "Never run as root",
            "Use .dockerignore",
        ],
        template: Template {
            id: "node",
            files: &[
                (
                    "Dockerfile",
                    r#"# Build stage
FROM node:18-alpine AS builder
WORKDIR /app
COPY package*.json ./
RUN npm ci --only=production

# Production stage
FROM node:18-alpine
WORKDIR /app
COPY --from=builder /app/node_modules ./node_modules
COPY . .
EXPOSE 3000
HEALTHCHECK --interval=30s CMD node healthcheck.js
USER node
CMD ["node", "index.js"]
"#,
                ),
                (
                    "docker-compose.yml",
                    r#"version: '3.8'
services:
  {{name}}:
    build: .
    ports:
      - "3000:3000"
    environment:
      - NODE_ENV=production
    restart: unless-stopped
"#,
                ),
                (".dockerignore", "node_modules\nnpm-debug.log\n.git\n.env\n"),
            ],
        },
        guide: guide(
            "Docker Best Practices",
            "Use multi-stage builds and minimize layers",
        ),
        optimizations: &["Use layer caching", "Minimize base image size"],
    },
    StubProfile {
        id: "kubernetes",
        name: "Kubernetes Master",
        group: "devops",
        classification: (Classification::Category, "devops"),
        specializations: &["K8s", "RBAC", "Helm", "Resource Limits", "Health Checks", "Monitoring"],
        best_practices: &[
            "Set resource limits",
            "Implement liveness and readiness checks",
            "Use RBAC for security",
            "Use Helm for package management",
        ],
        template: Template {
            id: "deployment",
            files: &[(
                "deployment.yaml",
                r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{name}}
spec:
  replicas: 3
  selector:
    matchLabels:
      app: {{name}}
  template:
    metadata:
      labels:
        app: {{name}}
    spec:
      containers:
      - name: app
        image: {{name}}:latest
        ports:
        - containerPort: 3000
        resources:
          limits:
            cpu: "500m"
            memory: "512Mi"
          requests:
            cpu: "250m"
            memory: "256Mi"
        livenessProbe:
          httpGet:
            path: /health
            port: 3000
          initialDelaySeconds: 30
        readinessProbe:
          httpGet:
            path: /ready
            port: 3000
          initialDelaySeconds: 10
"#,
            )],
        },
        guide: guide(
            "Kubernetes Best Practices",
            "Set resource limits, add health checks, implement RBAC",
        ),
        optimizations: &["Optimize resource allocation"],
    },
    StubProfile {
        id: "linux",
        name: "Linux Master",
        group: "devops",
        classification: (Classification::Category, "devops"),
        specializations: &["Linux", "Bash", "System Admin", "Security", "Automation"],
        best_practices: &[
            "Use bash best practices",
            "Implement proper permissions",
            "Automate with scripts",
        ],
        template: Template {
            id: "scripts",
            files: &[
                (
                    "setup.sh",
                    "#!/bin/bash\nset -euo pipefail\n\necho \"Setting up {{name}}\"\n",
                ),
                (
                    "deploy.sh",
                    "#!/bin/bash\nset -euo pipefail\n\necho \"Deploying {{name}}\"\n",
                ),
            ],
        },
        guide: guide(
            "Linux Best Practices",
            "Use proper bash practices and automation",
        ),
        optimizations: &["Use set -euo pipefail"],
    },
    StubProfile {
        id: "cicd",
        name: "CI/CD Master",
        group: "devops",
        classification: (Classification::Category, "devops"),
        specializations: &["GitHub Actions", "Jenkins", "GitLab CI", "Pipeline Optimization"],
        best_practices: &[
            "Implement automated testing",
            "Use caching for dependencies",
            "Implement security scans",
            "Use matrix builds",
        ],
        template: Template {
            id: "github-actions",
            files: &[(
                ".github/workflows/ci.yml",
                r#"name: {{name}} CI

on: [push, pull_request]

jobs:
  test:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-node@v4
        with:
          node-version: 18
          cache: npm
      - run: npm ci
      - run: npm test
"#,
            )],
        },
        guide: guide("CI/CD Best Practices", "Automate testing, use caching"),
        optimizations: &["Use caching", "Parallel jobs"],
    },
    StubProfile {
        id: "terraform",
        name: "Terraform Master",
        group: "devops",
        classification: (Classification::Category, "devops"),
        specializations: &["Terraform", "IaC", "Cloud Providers", "State Management"],
        best_practices: &[
            "Use modules for reusability",
            "Implement remote state",
            "Use variables and outputs",
        ],
        template: Template {
            id: "aws",
            files: &[
                (
                    "main.tf",
                    r#"terraform {
  required_providers {
    aws = {
      source  = "hashicorp/aws"
      version = "~> 5.0"
    }
  }
}

provider "aws" {
  region = var.aws_region
}
"#,
                ),
                (
                    "variables.tf",
                    r#"variable "aws_region" {
  description = "Region for {{name}}"
  type        = string
  default     = "us-east-1"
}
"#,
                ),
            ],
        },
        guide: guide("Terraform Best Practices", "Use modules and remote state"),
        optimizations: &["Use modules", "Implement remote state"],
    },
    // cloud
    StubProfile {
        id: "vercel",
        name: "Vercel Master",
        group: "cloud",
        classification: (Classification::Category, "cloud"),
        specializations: &["Vercel", "Serverless", "Edge Functions", "Next.js Deployment"],
        best_practices: &[
            "Use edge functions for low latency",
            "Optimize for serverless",
            "Use environment variables",
        ],
        template: Template {
            id: "project",
            files: &[
                (
                    "vercel.json",
                    r#"{
  "version": 2,
  "name": "{{name}}",
  "builds": [{ "src": "package.json", "use": "@vercel/node" }],
  "routes": [{ "src": "/(.*)", "dest": "/" }]
}
"#,
                ),
                (".vercelignore", "node_modules\n.env.local\n"),
            ],
        },
        guide: guide("Vercel Best Practices", "Use serverless and edge functions"),
        optimizations: &["Use edge functions"],
    },
    StubProfile {
        id: "aws",
        name: "AWS Master",
        group: "cloud",
        classification: (Classification::Category, "cloud"),
        specializations: &["EC2", "Lambda", "S3", "RDS", "CloudFormation", "Security"],
        best_practices: &[
            "Use IAM roles properly",
            "Implement least privilege",
            "Use CloudFormation for IaC",
            "Enable encryption",
        ],
        template: Template {
            id: "lambda",
            files: &[
                (
                    "lambda.js",
                    r#"exports.handler = async (event) => {
  console.log('Event:', JSON.stringify(event, null, 2));
  return {
    statusCode: 200,
    body: JSON.stringify({ message: 'Success' })
  };
};
"#,
                ),
                (
                    "template.yaml",
                    r#"AWSTemplateFormatVersion: '2010-09-09'
Transform: AWS::Serverless-2016-10-31
Description: {{name}}

Resources:
  Function:
    Type: AWS::Serverless::Function
    Properties:
      Handler: lambda.handler
      Runtime: nodejs18.x
      Events:
        Api:
          Type: Api
          Properties:
            Path: /
            Method: get
"#,
                ),
            ],
        },
        guide: guide("AWS Best Practices", "Use IAM properly, implement security"),
        optimizations: &["Use Lambda layers", "Optimize cold starts"],
    },
    StubProfile {
        id: "azure",
        name: "Azure Master",
        group: "cloud",
        classification: (Classification::Category, "cloud"),
        specializations: &["Azure Functions", "App Service", "DevOps", "Security"],
        best_practices: &[
            "Use managed identities",
            "Use Key Vault for secrets",
            "Enable monitoring",
        ],
        template: Template {
            id: "function",
            files: &[(
                "function.js",
                r#"module.exports = async function (context, req) {
  context.log('{{name}} triggered');
  context.res = {
    status: 200,
    body: { message: 'Success' }
  };
};
"#,
            )],
        },
        guide: guide(
            "Azure Best Practices",
            "Use managed identities and Key Vault",
        ),
        optimizations: &["Use premium plan for performance"],
    },
    StubProfile {
        id: "gcp",
        name: "GCP Master",
        group: "cloud",
        classification: (Classification::Category, "cloud"),
        specializations: &["Cloud Functions", "Cloud Run", "GKE", "BigQuery"],
        best_practices: &[
            "Use service accounts",
            "Implement Cloud Run for containers",
            "Enable monitoring with Cloud Logging",
        ],
        template: Template {
            id: "function",
            files: &[(
                "index.js",
                r#"exports.handler = (req, res) => {
  res.status(200).send({ service: '{{name}}', message: 'Success' });
};
"#,
            )],
        },
        guide: guide("GCP Best Practices", "Use service accounts and Cloud Run"),
        optimizations: &["Use Cloud Run for better scaling"],
    },
    // database
    StubProfile {
        id: "sql",
        name: "SQL Master",
        group: "database",
        classification: (Classification::Category, "database"),
        specializations: &[
            "PostgreSQL",
            "MySQL",
            "Query Optimization",
            "Indexing",
            "Transactions",
        ],
        best_practices: &[
            "Use prepared statements",
            "Implement proper indexing",
            "Use transactions properly",
        ],
        template: Template {
            id: "schema",
            files: &[(
                "schema.sql",
                r#"-- {{name}} schema
CREATE TABLE users (
  id SERIAL PRIMARY KEY,
  email VARCHAR(255) UNIQUE NOT NULL,
  name VARCHAR(255) NOT NULL,
  created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE INDEX idx_users_email ON users(email);
"#,
            )],
        },
        guide: guide(
            "SQL Best Practices",
            "Use prepared statements, optimize queries, proper indexing",
        ),
        optimizations: &["Add indexes", "Use EXPLAIN ANALYZE"],
    },
    StubProfile {
        id: "nosql",
        name: "NoSQL Master",
        group: "database",
        classification: (Classification::Category, "database"),
        specializations: &["MongoDB", "Redis", "Caching", "Document Design"],
        best_practices: &[
            "Design for your queries",
            "Use indexes effectively",
            "Implement caching with Redis",
        ],
        template: Template {
            id: "model",
            files: &[(
                "models/User.js",
                r#"const mongoose = require('mongoose');

const userSchema = new mongoose.Schema(
  {
    email: { type: String, required: true, unique: true, index: true },
    name: { type: String, required: true }
  },
  { timestamps: true, collection: '{{name}}_users' }
);

module.exports = mongoose.model('User', userSchema);
"#,
            )],
        },
        guide: guide(
            "NoSQL Best Practices",
            "Design for queries, use indexes, implement caching",
        ),
        optimizations: &["Use indexes", "Implement caching"],
    },
    StubProfile {
        id: "graphql",
        name: "GraphQL Master",
        group: "database",
        classification: (Classification::Category, "database"),
        specializations: &[
            "GraphQL",
            "Apollo Server",
            "Resolvers",
            "Schema Design",
            "DataLoader",
        ],
        best_practices: &[
            "Design schema carefully",
            "Implement DataLoader for batching",
            "Use pagination",
        ],
        template: Template {
            id: "server",
            files: &[
                (
                    "schema.graphql",
                    r#"type User {
  id: ID!
  email: String!
  name: String!
}

type Query {
  users: [User!]!
}

type Mutation {
  createUser(email: String!, name: String!): User!
}
"#,
                ),
                (
                    "resolvers.js",
                    r#"// {{name}} resolvers
module.exports = {
  Query: {
    users: (_parent, _args, { dataSources }) => dataSources.users.findAll()
  },
  Mutation: {
    createUser: (_parent, args, { dataSources }) => dataSources.users.create(args)
  }
};
"#,
                ),
            ],
        },
        guide: guide(
            "GraphQL Best Practices",
            "Use DataLoader, design schema carefully",
        ),
        optimizations: &["Use DataLoader", "Implement pagination"],
    },
    // design
    StubProfile {
        id: "figma",
        name: "Figma Master",
        group: "design",
        classification: (Classification::Category, "design"),
        specializations: &[
            "UI/UX Design",
            "Prototyping",
            "Design Systems",
            "Components",
            "Auto Layout",
        ],
        best_practices: &[
            "Use components for reusability",
            "Implement design systems",
            "Use auto layout",
        ],
        template: Template {
            id: "design-system",
            files: &[(
                "design-system.md",
                r#"# {{name}} Design System

## Colors
- Primary: #3B82F6
- Secondary: #10B981

## Typography
- Headings: Inter Bold
- Body: Inter Regular

## Spacing
4px base grid.
"#,
            )],
        },
        guide: guide("Figma Best Practices", "Use components and design systems"),
        optimizations: &["Use components", "Implement auto layout"],
    },
    StubProfile {
        id: "css",
        name: "CSS Master",
        group: "design",
        classification: (Classification::Category, "design"),
        specializations: &[
            "CSS3",
            "Tailwind CSS",
            "SASS",
            "Responsive Design",
            "Flexbox",
            "Grid",
        ],
        best_practices: &[
            "Use Tailwind for utility-first CSS",
            "Implement responsive design",
            "Use CSS Grid and Flexbox",
            "Follow BEM naming convention",
        ],
        template: Template {
            id: "tailwind",
            files: &[
                (
                    "tailwind.config.js",
                    r#"module.exports = {
  content: ['./src/**/*.{html,js,jsx,ts,tsx}'],
  theme: { extend: {} },
  plugins: []
};
"#,
                ),
                (
                    "styles.css",
                    r#"/* {{name}} */
.container {
  display: grid;
  gap: 1rem;
  grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}
"#,
                ),
            ],
        },
        guide: guide(
            "CSS Best Practices",
            "Use Tailwind, responsive design, modern layouts",
        ),
        optimizations: &["Use CSS Grid", "Minimize specificity"],
    },
    StubProfile {
        id: "svg",
        name: "SVG Master",
        group: "design",
        classification: (Classification::Category, "design"),
        specializations: &["SVG", "Vector Graphics", "Animations", "Optimization"],
        best_practices: &[
            "Optimize SVG files",
            "Use viewBox for scaling",
            "Implement accessibility",
        ],
        template: Template {
            id: "icon",
            files: &[(
                "icon.svg",
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" role="img" aria-label="{{name}}">
  <circle cx="12" cy="12" r="10"/>
</svg>
"#,
            )],
        },
        guide: guide(
            "SVG Best Practices",
            "Optimize files, use viewBox, implement accessibility",
        ),
        optimizations: &["Remove unnecessary attributes", "Minimize paths"],
    },
    // formats
    StubProfile {
        id: "json",
        name: "JSON Master",
        group: "formats",
        classification: (Classification::Category, "formats"),
        specializations: &["JSON", "JSON Schema", "Validation", "Parsing"],
        best_practices: &[
            "Validate JSON against schema",
            "Use proper data types",
            "Keep structure consistent",
        ],
        template: Template {
            id: "schema",
            files: &[
                ("data.json", "{\n  \"name\": \"{{name}}\",\n  \"version\": \"1.0.0\"\n}\n"),
                (
                    "schema.json",
                    r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "{{name}}",
  "type": "object",
  "properties": {
    "name": { "type": "string" },
    "version": { "type": "string" }
  },
  "required": ["name", "version"]
}
"#,
                ),
            ],
        },
        guide: guide(
            "JSON Best Practices",
            "Validate with schema, use proper types",
        ),
        optimizations: &["Minimize whitespace"],
    },
    StubProfile {
        id: "markdown",
        name: "Markdown Master",
        group: "formats",
        classification: (Classification::Category, "formats"),
        specializations: &["Markdown", "Documentation", "MDX", "GitHub Flavored Markdown"],
        best_practices: &[
            "Use proper heading hierarchy",
            "Format code blocks with language",
            "Add alt text to images",
        ],
        template: Template {
            id: "readme",
            files: &[(
                "README.md",
                r#"# {{name}}

## Installation

```bash
npm install
```

## Usage

```bash
npm start
```

## License

MIT
"#,
            )],
        },
        guide: guide(
            "Markdown Best Practices",
            "Use proper hierarchy, format code blocks",
        ),
        optimizations: &["Add table of contents"],
    },
    StubProfile {
        id: "yaml",
        name: "YAML Master",
        group: "formats",
        classification: (Classification::Category, "formats"),
        specializations: &["YAML", "Configuration", "Kubernetes", "CI/CD"],
        best_practices: &[
            "Use consistent indentation",
            "Validate YAML syntax",
            "Use anchors for reusability",
        ],
        template: Template {
            id: "config",
            files: &[(
                "config.yaml",
                r#"name: {{name}}
version: 1.0.0

defaults: &defaults
  timeout: 30
  retries: 3

environments:
  development:
    <<: *defaults
  production:
    <<: *defaults
    retries: 5
"#,
            )],
        },
        guide: guide(
            "YAML Best Practices",
            "Use consistent indentation, validate syntax",
        ),
        optimizations: &["Use anchors for repeated values"],
    },
    StubProfile {
        id: "xml",
        name: "XML Master",
        group: "formats",
        classification: (Classification::Category, "formats"),
        specializations: &["XML", "XSD", "XSLT", "Parsing"],
        best_practices: &[
            "Use proper XML structure",
            "Validate against XSD",
            "Use namespaces correctly",
        ],
        template: Template {
            id: "document",
            files: &[(
                "data.xml",
                r#"<?xml version="1.0" encoding="UTF-8"?>
<project name="{{name}}">
  <version>1.0.0</version>
</project>
"#,
            )],
        },
        guide: guide(
            "XML Best Practices",
            "Use proper structure, validate with XSD",
        ),
        optimizations: &["Minimize document size"],
    },
    // quality
    StubProfile {
        id: "testing",
        name: "Testing Master",
        group: "quality",
        classification: (Classification::Category, "quality"),
        specializations: &[
            "Jest",
            "Pytest",
            "Cypress",
            "Unit Testing",
            "Integration Testing",
            "E2E Testing",
        ],
        best_practices: &[
            "Write tests for all critical paths",
            "Use AAA pattern (Arrange, Act, Assert)",
            "Mock external dependencies",
            "Use descriptive test names",
        ],
        template: Template {
            id: "jest",
            files: &[
                (
                    "tests/example.test.js",
                    r#"describe('{{name}}', () => {
  it('works', () => {
    // Arrange
    const input = 1;
    // Act
    const result = input + 1;
    // Assert
    expect(result).toBe(2);
  });
});
"#,
                ),
                (
                    "jest.config.js",
                    r#"module.exports = {
  testEnvironment: 'node',
  collectCoverage: true,
  coverageThreshold: { global: { lines: 80 } }
};
"#,
                ),
            ],
        },
        guide: guide(
            "Testing Best Practices",
            "Write comprehensive tests, use AAA pattern, maintain coverage",
        ),
        optimizations: &["Improve test coverage", "Use test fixtures"],
    },
    StubProfile {
        id: "security",
        name: "Security Master",
        group: "quality",
        classification: (Classification::Category, "quality"),
        specializations: &[
            "OWASP",
            "OWASP Top 10",
            "Pentesting",
            "DevSecOps",
            "Vulnerability Assessment",
            "Secure Coding",
        ],
        best_practices: &[
            "Follow OWASP guidelines",
            "Implement input validation",
            "Use parameterized queries",
            "Encrypt sensitive data",
            "Keep dependencies updated",
        ],
        template: Template {
            id: "auth",
            files: &[
                (
                    "security/auth.js",
                    r#"const bcrypt = require('bcrypt');
const jwt = require('jsonwebtoken');

const SALT_ROUNDS = 12;

async function hashPassword(password) {
  return bcrypt.hash(password, SALT_ROUNDS);
}

function signToken(payload) {
  return jwt.sign(payload, process.env.JWT_SECRET, { expiresIn: '1h', issuer: '{{name}}' });
}

module.exports = { hashPassword, signToken };
"#,
                ),
                (".env.example", "JWT_SECRET=your-secret-key-here\n"),
            ],
        },
        guide: guide(
            "Security Best Practices",
            "Follow OWASP, validate input, hash passwords, use HTTPS",
        ),
        optimizations: &["Implement HTTPS", "Add CSRF protection"],
    },
];
