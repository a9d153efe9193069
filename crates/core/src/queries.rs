//! GraphQL documents sent to the GitHub API.
//!
//! The field names in these documents are mirrored by the types in [`crate::raw`].

use indoc::indoc;

/// Identity and aggregate counts for a user. Not time-ranged.
pub const USER_PROFILE_QUERY: &str = indoc! {r#"
    query GetUserProfile($username: String!) {
      user(login: $username) {
        name
        login
        avatarUrl
        bio
        company
        location
        createdAt
        followers {
          totalCount
        }
        following {
          totalCount
        }
        repositories {
          totalCount
        }
        starredRepositories {
          totalCount
        }
      }
    }
"#};

/// Contribution counters and calendar for a single time window.
pub const USER_CONTRIBUTIONS_QUERY: &str = indoc! {r#"
    query GetUserContributions($username: String!, $from: DateTime!, $to: DateTime!) {
      user(login: $username) {
        contributionsCollection(from: $from, to: $to) {
          totalCommitContributions
          totalPullRequestContributions
          totalIssueContributions
          totalRepositoryContributions
          restrictedContributionsCount
          totalRepositoriesWithContributedCommits
          contributionCalendar {
            totalContributions
            weeks {
              contributionDays {
                contributionCount
                date
              }
            }
          }
        }
      }
    }
"#};

/// Repositories owned by the user, most starred first. Not time-ranged.
pub const USER_REPOSITORIES_QUERY: &str = indoc! {r#"
    query GetUserRepositories($username: String!, $first: Int!) {
      user(login: $username) {
        repositories(first: $first, orderBy: {field: STARGAZERS, direction: DESC}) {
          nodes {
            name
            description
            url
            stargazerCount
            forkCount
            isPrivate
            primaryLanguage {
              name
              color
            }
          }
        }
      }
    }
"#};

/// Calendar plus review and issue contributions for a single time window.
pub const USER_ENGAGEMENT_QUERY: &str = indoc! {r#"
    query GetUserEngagement($username: String!, $from: DateTime!, $to: DateTime!, $first: Int!) {
      user(login: $username) {
        contributionsCollection(from: $from, to: $to) {
          contributionCalendar {
            totalContributions
            weeks {
              contributionDays {
                contributionCount
                date
              }
            }
          }
          pullRequestReviewContributions(first: $first) {
            nodes {
              pullRequest {
                createdAt
                mergedAt
                state
                comments {
                  totalCount
                }
                reviewDecision
              }
              occurredAt
            }
          }
          issueContributions(first: $first) {
            nodes {
              issue {
                createdAt
                closedAt
                state
                comments {
                  totalCount
                }
              }
            }
          }
        }
      }
    }
"#};

/// Language sizes and default branch commit counts, most recently updated repositories first.
pub const USER_LANGUAGES_QUERY: &str = indoc! {r#"
    query GetUserLanguages($username: String!, $first: Int!, $languages: Int!) {
      user(login: $username) {
        repositories(first: $first, orderBy: {field: UPDATED_AT, direction: DESC}) {
          nodes {
            isPrivate
            languages(first: $languages, orderBy: {field: SIZE, direction: DESC}) {
              edges {
                size
                node {
                  name
                  color
                }
              }
            }
            defaultBranchRef {
              target {
                ... on Commit {
                  history {
                    totalCount
                  }
                }
              }
            }
          }
        }
      }
    }
"#};
