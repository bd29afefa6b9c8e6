//! Code snippet catalog.

use super::CodeSnippet;

pub const CODE_SNIPPETS: &[CodeSnippet] = &[
    CodeSnippet {
        title: "Laravel Route with Middleware",
        description: "Protected route with authentication middleware",
        language: "php",
        category: "laravel",
        code: r#"Route::middleware(['auth'])->group(function () {
    Route::get('/dashboard', [DashboardController::class, 'index']);
    Route::resource('posts', PostController::class);
});"#,
    },
    CodeSnippet {
        title: "Laravel Eloquent Relationship",
        description: "One-to-many relationship example",
        language: "php",
        category: "laravel",
        code: r#"// User Model
public function posts()
{
    return $this->hasMany(Post::class);
}

// Post Model
public function user()
{
    return $this->belongsTo(User::class);
}"#,
    },
    CodeSnippet {
        title: "jQuery AJAX Request",
        description: "Simple AJAX request with error handling",
        language: "javascript",
        category: "jquery",
        code: r#"$.ajax({
    url: '/api/data',
    method: 'GET',
    dataType: 'json',
    success: function(response) {
        console.log('Success:', response);
    },
    error: function(xhr, status, error) {
        console.error('Error:', error);
    }
});"#,
    },
    CodeSnippet {
        title: "MySQL Join Query",
        description: "Inner join with multiple tables",
        language: "sql",
        category: "mysql",
        code: r#"SELECT u.name, p.title, c.name as category
FROM users u
INNER JOIN posts p ON u.id = p.user_id
INNER JOIN categories c ON p.category_id = c.id
WHERE u.active = 1
ORDER BY p.created_at DESC;"#,
    },
    CodeSnippet {
        title: "CSS Flexbox Center",
        description: "Perfect centering with flexbox",
        language: "css",
        category: "css",
        code: r#".container {
    display: flex;
    justify-content: center;
    align-items: center;
    min-height: 100vh;
}"#,
    },
    CodeSnippet {
        title: "JavaScript Async/Await",
        description: "Modern async function with error handling",
        language: "javascript",
        category: "javascript",
        code: r#"async function fetchData() {
    try {
        const response = await fetch('/api/data');
        const data = await response.json();
        return data;
    } catch (error) {
        console.error('Error fetching data:', error);
        throw error;
    }
}"#,
    },
];
