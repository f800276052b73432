use crate::{
    entities::{
        project::{NewProject, ProjectId},
        technology::{NewTechnology, TechnologyCategory::{self, *}},
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    use_cases::projects::ProjectHandler,
};

const REPO_BASE: &str = "https://github.com/brucemaber";
const IMAGE_BASE: &str = "https://images.unsplash.com";
const IMAGE_PARAMS: &str = "ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=800&q=80";

struct DemoProject {
    title: &'static str,
    description: &'static str,
    repo: &'static str,
    photo: &'static str,
    stars: i32,
    forks: i32,
    views: i32,
    featured: bool,
    technologies: &'static [(&'static str, TechnologyCategory)],
}

const DEMO_PROJECTS: [DemoProject; 6] = [
    DemoProject {
        title: "E-commerce Dashboard",
        description: "A modern dashboard for e-commerce analytics with real-time data visualization.",
        repo: "ecommerce-dashboard",
        photo: "photo-1517694712202-14dd9538aa97",
        stars: 45,
        forks: 12,
        views: 156,
        featured: true,
        technologies: &[("React", Frontend), ("Node.js", Backend), ("GraphQL", Backend)],
    },
    DemoProject {
        title: "Task Manager App",
        description: "A productivity app for managing tasks with drag-and-drop interface and reminders.",
        repo: "task-manager",
        photo: "photo-1575089976121-8ed7b2a54265",
        stars: 32,
        forks: 8,
        views: 98,
        featured: true,
        technologies: &[("Next.js", Frontend), ("Firebase", Backend), ("TypeScript", Language)],
    },
    DemoProject {
        title: "Weather Forecast",
        description: "A beautiful weather forecast application with animated visualizations.",
        repo: "weather-forecast",
        photo: "photo-1616469829941-c7200edec809",
        stars: 27,
        forks: 5,
        views: 84,
        featured: true,
        technologies: &[("React", Frontend), ("JavaScript", Language), ("SCSS", Styling)],
    },
    DemoProject {
        title: "Blog Platform",
        description: "A full-featured blog platform with markdown support, user authentication, and commenting system.",
        repo: "blog-platform",
        photo: "photo-1499750310107-5fef28a66643",
        stars: 24,
        forks: 7,
        views: 78,
        featured: false,
        technologies: &[("Next.js", Frontend), ("Prisma", Database), ("TypeScript", Language)],
    },
    DemoProject {
        title: "File Sharing App",
        description: "A secure file sharing application with end-to-end encryption and expiring links.",
        repo: "file-sharing",
        photo: "photo-1526498460520-4c246339dccb",
        stars: 18,
        forks: 3,
        views: 67,
        featured: false,
        technologies: &[("React", Frontend), ("Node.js", Backend), ("Express", Backend)],
    },
    DemoProject {
        title: "Recipe App",
        description: "A recipe discovery and management app with meal planning and shopping list features.",
        repo: "recipe-app",
        photo: "photo-1556911220-e15b29be8c8f",
        stars: 15,
        forks: 2,
        views: 42,
        featured: false,
        technologies: &[("React Native", Mobile), ("Redux", State), ("Firebase", Backend)],
    },
];

impl DemoProject {
    fn to_new_project(&self) -> NewProject {
        NewProject {
            title: self.title.to_string(),
            description: self.description.to_string(),
            repo_url: format!("{}/{}", REPO_BASE, self.repo),
            image_url: Some(format!("{}/{}?{}", IMAGE_BASE, self.photo, IMAGE_PARAMS)),
            stars: Some(self.stars),
            forks: Some(self.forks),
            views: Some(self.views),
            featured: Some(self.featured),
        }
    }
}

/// Loads the six demo projects and their technologies. Returns the ids
/// assigned to the projects, in creation order.
pub async fn seed_demo_projects<R>(handler: &ProjectHandler<R>) -> Result<Vec<ProjectId>, AppError>
where
    R: ProjectRepository,
{
    let mut ids = Vec::with_capacity(DEMO_PROJECTS.len());

    for demo in DEMO_PROJECTS.iter() {
        let project = handler.create_project(demo.to_new_project()).await?;

        for (label, category) in demo.technologies {
            handler
                .add_technology(NewTechnology::new(project.id, *label, *category))
                .await?;
        }

        ids.push(project.id);
    }

    tracing::info!("Seeded {} demo projects", ids.len());
    Ok(ids)
}
