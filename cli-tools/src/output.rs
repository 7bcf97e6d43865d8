//! Rendering of command results in the three output formats.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use shared::{Article, Subject, UserSubscription};
use tabled::{Table, Tabled};

#[derive(Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
    Table,
}

#[derive(Tabled)]
struct ArticleRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Created")]
    created_at: String,
    #[tabled(rename = "Comments")]
    comments: usize,
}

#[derive(Tabled)]
struct SubjectRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Subscribed")]
    subscribed: String,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct SubscriptionRow {
    #[tabled(rename = "Subject ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Short date for display; falls back to the raw string
fn display_date(article: &Article) -> String {
    article
        .created_at_utc()
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| article.created_at.clone())
}

pub fn articles(format: OutputFormat, articles: &[Article]) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(articles)?,
        OutputFormat::Table => {
            if articles.is_empty() {
                println!("No articles found");
            } else {
                let rows: Vec<ArticleRow> = articles
                    .iter()
                    .map(|a| ArticleRow {
                        id: a.article_id,
                        title: a.title.clone(),
                        author: a.author.username.clone(),
                        subject: a.subject.name.clone(),
                        created_at: display_date(a),
                        comments: a.comments.len(),
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Pretty => {
            if articles.is_empty() {
                println!("No articles found");
            } else {
                println!("{} {} article(s):", "Found".bold(), articles.len());
                for a in articles {
                    println!("\n  {} {}", format!("#{}", a.article_id).dimmed(), a.title.bold());
                    println!(
                        "    {} in {} on {}",
                        a.author.username.cyan(),
                        a.subject.name,
                        display_date(a)
                    );
                }
            }
        }
    }
    Ok(())
}

pub fn article(format: OutputFormat, article: &Article) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(article)?,
        OutputFormat::Pretty | OutputFormat::Table => {
            println!("{}", article.title.bold());
            println!(
                "  {} in {} on {}",
                article.author.username.cyan(),
                article.subject.name,
                display_date(article)
            );
            println!();
            println!("{}", article.content);
            println!();
            if article.comments.is_empty() {
                println!("{}", "No comments yet".dimmed());
            } else {
                println!("{} ({}):", "Comments".bold(), article.comments.len());
                for c in &article.comments {
                    println!("  {} {}", format!("{}:", c.author).cyan(), c.content);
                }
            }
        }
    }
    Ok(())
}

pub fn subjects(format: OutputFormat, subjects: &[Subject]) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(subjects)?,
        OutputFormat::Table => {
            let rows: Vec<SubjectRow> = subjects
                .iter()
                .map(|s| SubjectRow {
                    id: s.subject_id,
                    name: s.name.clone(),
                    subscribed: if s.subscribed { "yes" } else { "no" }.to_string(),
                    description: s.description.clone(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Pretty => {
            for s in subjects {
                let marker = if s.subscribed { "●".green() } else { "○".normal() };
                println!("  {} {} {}", marker, s.name.bold(), format!("#{}", s.subject_id).dimmed());
                if !s.description.is_empty() {
                    println!("      {}", s.description);
                }
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct ProfileView<'a> {
    username: &'a str,
    email: &'a str,
    subscriptions: &'a [UserSubscription],
}

pub fn profile(
    format: OutputFormat,
    username: &str,
    email: &str,
    subscriptions: &[UserSubscription],
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(&ProfileView {
            username,
            email,
            subscriptions,
        })?,
        OutputFormat::Table => {
            println!("{} {} <{}>", "User:".bold(), username, email);
            let rows: Vec<SubscriptionRow> = subscriptions
                .iter()
                .map(|s| SubscriptionRow {
                    id: s.subject_id,
                    name: s.subject_name.clone(),
                    description: s.subject_description.clone(),
                })
                .collect();
            println!("{}", Table::new(rows));
        }
        OutputFormat::Pretty => {
            println!("{} {}", "User:".bold(), username);
            println!("  Email: {}", email);
            if subscriptions.is_empty() {
                println!("  {}", "No subscriptions".dimmed());
            } else {
                println!("  Subscriptions:");
                for s in subscriptions {
                    println!("    {} {}", s.subject_name.bold(), format!("#{}", s.subject_id).dimmed());
                }
            }
        }
    }
    Ok(())
}
